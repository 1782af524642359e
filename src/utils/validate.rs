use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-\(\)]{10,15}$").expect("Invalid phone regex"));

/// 门户密码策略：最少 6 个字符
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email format");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    // 电话号码校验：可选的 + 前缀，10-15 位数字/空格/连字符/括号
    if !PHONE_RE.is_match(phone) {
        return Err("Invalid phone number format");
    }
    Ok(())
}

pub fn validate_password_length(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

pub fn validate_semester(semester: i32) -> Result<(), &'static str> {
    // 学期范围校验：1 到 8
    if !(1..=8).contains(&semester) {
        return Err("Semester must be between 1 and 8");
    }
    Ok(())
}

/// 收集一组必填字符串字段中缺失或为空白的字段名
///
/// 返回 None 表示全部有效，否则返回 "Missing or invalid fields: a, b" 形式的消息。
pub fn collect_missing_fields(fields: &[(&'static str, &str)]) -> Option<String> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("Missing or invalid fields: {}", missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("student@university.edu").is_ok());
        assert!(validate_email("a.b+c@dept.example.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@no-local.com").is_err());
    }

    #[test]
    fn test_valid_phone() {
        assert!(validate_phone("03001234567").is_ok());
        assert!(validate_phone("+92 300 1234567").is_ok());
        assert!(validate_phone("(042) 111-2223").is_ok());
    }

    #[test]
    fn test_invalid_phone() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("phone-number").is_err());
        assert!(validate_phone("1234567890123456789").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password_length("secret").is_ok());
        assert!(validate_password_length("12345").is_err());
    }

    #[test]
    fn test_semester_range() {
        assert!(validate_semester(1).is_ok());
        assert!(validate_semester(8).is_ok());
        assert!(validate_semester(0).is_err());
        assert!(validate_semester(9).is_err());
    }

    #[test]
    fn test_collect_missing_fields() {
        assert!(collect_missing_fields(&[("name", "Ali"), ("email", "a@b.co")]).is_none());

        let msg = collect_missing_fields(&[("name", ""), ("email", "  "), ("phone", "x")])
            .expect("should report missing fields");
        assert_eq!(msg, "Missing or invalid fields: name, email");
    }
}
