pub mod html;
pub mod locator;
pub mod platform;

pub use locator::{parse_view_path, share_url};
pub use platform::Platform;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LENGTH: usize = 8;
const MAX_ID_LENGTH: usize = 64;

/// 将非负整数编码为 base-36 字符串
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ID_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Build a link id: base-36 millisecond timestamp followed by a random
/// base-36 suffix. Uniqueness against existing ids is checked by the caller.
pub fn generate_link_id(now_millis: i64) -> String {
    use std::iter;

    let prefix = to_base36(now_millis.max(0) as u64);
    let suffix: String = iter::repeat_with(|| {
        ID_ALPHABET[rand::random_range(0..ID_ALPHABET.len())] as char
    })
    .take(ID_SUFFIX_LENGTH)
    .collect();

    format!("{}{}", prefix, suffix)
}

/// 校验链接 id 格式（仅小写字母和数字）
#[inline]
pub fn is_valid_link_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LENGTH
        && id
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_generated_ids_are_valid_and_prefixed() {
        let id = generate_link_id(1_700_000_000_000);
        assert!(id.starts_with("loyw3v28"));
        assert_eq!(id.len(), "loyw3v28".len() + ID_SUFFIX_LENGTH);
        assert!(is_valid_link_id(&id));
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = generate_link_id(42);
        let b = generate_link_id(42);
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_valid_link_id() {
        assert!(is_valid_link_id("lq2x9abc"));
        assert!(!is_valid_link_id(""));
        assert!(!is_valid_link_id("ABC"));
        assert!(!is_valid_link_id("../etc"));
        assert!(!is_valid_link_id(&"a".repeat(65)));
    }
}
