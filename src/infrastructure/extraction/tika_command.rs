use std::borrow::Cow;
use std::ffi::OsString;
use std::process::Stdio;

use tokio::process::Command;

use crate::domain::SourceDocument;

use super::shell_words;

const DYLD_LIBRARY_PATH: &str = "DYLD_LIBRARY_PATH";

/// One Tika invocation: program, argument vector, and child-environment
/// policy. Argument order is part of the contract the tool expects.
#[derive(Debug, Clone)]
pub struct TikaCommand {
    program: String,
    args: Vec<OsString>,
    clear_dyld_library_path: bool,
}

impl TikaCommand {
    /// Text extraction run (`-jar <tika> -t <path>`). The encoding and
    /// classpath arguments are omitted for MP3 audio inputs.
    pub fn extract(
        java_path: &str,
        tika_path: &str,
        document: &SourceDocument,
        clear_dyld_library_path: bool,
    ) -> Self {
        let mut args: Vec<OsString> = vec!["-Djava.awt.headless=true".into()];

        if !document.media_type.is_mpeg_audio() {
            args.push("-Dfile.encoding=UTF8".into());
            args.push("-cp".into());
            args.push(tika_path.into());
        }

        args.push("-jar".into());
        args.push(tika_path.into());
        args.push("-t".into());
        args.push(document.path.as_os_str().to_os_string());

        Self {
            program: java_path.to_string(),
            args,
            clear_dyld_library_path,
        }
    }

    /// Version probe (`-jar <tika> -V`) proving the archive can be reached
    /// and executed.
    pub fn version_probe(java_path: &str, tika_path: &str, clear_dyld_library_path: bool) -> Self {
        Self {
            program: java_path.to_string(),
            args: vec!["-jar".into(), tika_path.into(), "-V".into()],
            clear_dyld_library_path,
        }
    }

    /// Bare runtime invocation with no arguments, used by the self-check.
    pub fn runtime_self_check(java_path: &str, clear_dyld_library_path: bool) -> Self {
        Self {
            program: java_path.to_string(),
            args: Vec::new(),
            clear_dyld_library_path,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Shell-quoted rendering for logs. Tokenizing it with `sh` recovers
    /// the exact program and argument vector.
    pub fn to_shell_line(&self) -> String {
        let parts: Vec<Cow<'_, str>> = std::iter::once(Cow::Borrowed(self.program.as_str()))
            .chain(self.args.iter().map(|arg| arg.to_string_lossy()))
            .collect();

        shell_words::join(parts)
    }

    /// Child-process builder: stdin closed, output captured, child killed
    /// if the future running it is dropped.
    pub fn into_tokio(self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Removed from the child environment only; the parent keeps it.
        if self.clear_dyld_library_path {
            command.env_remove(DYLD_LIBRARY_PATH);
        }

        command
    }
}
