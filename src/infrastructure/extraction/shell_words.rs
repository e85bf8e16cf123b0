use std::borrow::Cow;

/// POSIX single-quote escaping over raw bytes. Multibyte UTF-8 arguments
/// pass through untouched, independent of the process locale.
pub fn quote(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && arg.bytes().all(is_safe_byte) {
        return Cow::Borrowed(arg);
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('\'');
    for ch in arg.chars() {
        if ch == '\'' {
            // close the quote, emit a literal quote, reopen
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');

    Cow::Owned(quoted)
}

pub fn join<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote(arg.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_safe_byte(b: u8) -> bool {
    matches!(
        b,
        b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'/' | b'=' | b':' | b'@' | b'%' | b'+' | b','
    )
}
