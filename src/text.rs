/// `\r\n` and lone `\r` become `\n`; surrounding whitespace is trimmed.
pub fn normalize_description(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}
