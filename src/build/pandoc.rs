// Converter invocation.
//
// pandoc runs as a child process with stderr piped; a helper thread drains
// the pipe so a chatty converter can't fill it and stall. The wait is a
// `try_wait` poll against the deadline — on timeout the child is killed and
// reaped before the error goes up.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

use super::BuildOptions;

/// Default ceiling on one converter run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the converter over the source files with the assembled arguments.
/// Sources go last on the command line, in project order.
pub(crate) fn convert(sources: &[String], args: &[String], options: &BuildOptions) -> Result<()> {
    log::debug!("running {} {:?} {:?}", options.program, args, sources);

    let mut child = Command::new(&options.program)
        .args(args)
        .args(sources)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConverterNotFound(options.program.clone())
            } else {
                Error::Io(e)
            }
        })?;

    // Drain stderr on its own thread while the poll loop below watches the
    // child; reading from the main thread could block behind the timeout.
    let stderr_pipe = child.stderr.take();
    let drain = thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = stderr_pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    });

    let deadline = Instant::now() + options.timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            child.kill()?;
            child.wait()?;
            let _ = drain.join();
            return Err(Error::ConverterTimeout {
                timeout: options.timeout,
            });
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stderr = drain.join().unwrap_or_default();
    if !status.success() {
        return Err(Error::Converter {
            status,
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(())
}
