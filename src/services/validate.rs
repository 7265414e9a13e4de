/// Checks dotted-quad IPv4 form: four fields, digits only, each 0..=255.
/// Leading zeros are tolerated, matching what the upstream form accepts.
pub fn is_ipv4(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts.iter().all(|part| {
        !part.is_empty()
            && part.chars().all(|c| c.is_ascii_digit())
            && part.parse::<u32>().map(|v| v <= 255).unwrap_or(false)
    })
}
