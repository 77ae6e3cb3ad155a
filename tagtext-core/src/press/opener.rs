use std::process::Command;
use std::thread;
use thiserror::Error;

/// Schemes the system opener hands to the platform
const OPENABLE_SCHEMES: &[&str] = &["http", "https", "mailto", "ftp", "tel"];

#[cfg(target_os = "macos")]
const PLATFORM_OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const PLATFORM_OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Link opening failure
#[derive(Error, Debug)]
pub enum PressError {
    /// URL uses a scheme that is not opened
    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),

    /// Platform opener could not be started
    #[error("failed to launch opener for {url}: {source}")]
    Launch {
        /// URL being opened
        url: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Opens links for the default press handler
pub trait LinkOpener: Send + Sync {
    /// Whether `url` can be opened
    fn can_open(&self, url: &str) -> bool;

    /// Open `url` without waiting for the result
    fn open(&self, url: &str) -> Result<(), PressError>;
}

/// Opens links with the platform's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    /// Target handed to the platform opener
    ///
    /// Scheme-less links get `mailto:` (e-mail addresses) or `https://`.
    pub fn target(url: &str) -> Option<String> {
        match url.split_once(':') {
            Some((scheme, rest)) if Self::is_scheme(scheme) && !Self::is_port(scheme, rest) => {
                let scheme = scheme.to_ascii_lowercase();
                OPENABLE_SCHEMES
                    .contains(&scheme.as_str())
                    .then(|| url.to_string())
            }
            _ if url.contains('@') && !url.contains('/') => Some(format!("mailto:{url}")),
            _ => Some(format!("https://{url}")),
        }
    }

    /// `host:8080/...` has a port, not a scheme
    fn is_port(scheme: &str, rest: &str) -> bool {
        if OPENABLE_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
            return false;
        }
        let port = rest.split(['/', '?', '#']).next().unwrap_or_default();
        !port.is_empty() && port.chars().all(|c| c.is_ascii_digit())
    }

    fn is_scheme(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    }

    fn command(target: &str) -> Command {
        let (program, args) = PLATFORM_OPENER;
        let mut cmd = Command::new(program);
        cmd.args(args).arg(target);
        cmd
    }
}

impl LinkOpener for SystemLinkOpener {
    fn can_open(&self, url: &str) -> bool {
        !url.trim().is_empty() && Self::target(url).is_some()
    }

    fn open(&self, url: &str) -> Result<(), PressError> {
        let target = Self::target(url).ok_or_else(|| PressError::UnsupportedUrl(url.to_string()))?;
        log::debug!("opening {target}");
        spawn_reaped(Self::command(&target)).map_err(|source| PressError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Start `cmd` and wait for it on a detached thread so the child is reaped
fn spawn_reaped(mut cmd: Command) -> std::io::Result<()> {
    let mut child = cmd.spawn()?;
    thread::Builder::new()
        .name("tagtext-opener".to_string())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => log::debug!("opener exited with {status}"),
            Ok(_) => {}
            Err(e) => log::warn!("failed to wait for opener: {e}"),
        })?;
    Ok(())
}

/// Reports what would be opened without launching anything
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunOpener;

impl LinkOpener for DryRunOpener {
    fn can_open(&self, url: &str) -> bool {
        SystemLinkOpener.can_open(url)
    }

    fn open(&self, url: &str) -> Result<(), PressError> {
        let target = SystemLinkOpener::target(url)
            .ok_or_else(|| PressError::UnsupportedUrl(url.to_string()))?;
        log::info!("would open {target}");
        Ok(())
    }
}
