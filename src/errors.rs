use std::fmt;

#[derive(Debug, Clone)]
pub enum TermitoonError {
    FileOperation(String),
    Serialization(String),
    Validation(String),
    StorageBackendNotFound(String),
}

impl TermitoonError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TermitoonError::FileOperation(_) => "E001",
            TermitoonError::Serialization(_) => "E002",
            TermitoonError::Validation(_) => "E003",
            TermitoonError::StorageBackendNotFound(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TermitoonError::FileOperation(_) => "File Operation Error",
            TermitoonError::Serialization(_) => "Serialization Error",
            TermitoonError::Validation(_) => "Validation Error",
            TermitoonError::StorageBackendNotFound(_) => "Storage Backend Not Found",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TermitoonError::FileOperation(msg) => msg,
            TermitoonError::Serialization(msg) => msg,
            TermitoonError::Validation(msg) => msg,
            TermitoonError::StorageBackendNotFound(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TermitoonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TermitoonError {}

// 便捷的构造函数
impl TermitoonError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        TermitoonError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        TermitoonError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TermitoonError::Validation(msg.into())
    }

    pub fn storage_backend_not_found<T: Into<String>>(msg: T) -> Self {
        TermitoonError::StorageBackendNotFound(msg.into())
    }
}

impl From<std::io::Error> for TermitoonError {
    fn from(err: std::io::Error) -> Self {
        TermitoonError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TermitoonError {
    fn from(err: serde_json::Error) -> Self {
        TermitoonError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TermitoonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            TermitoonError::file_operation("a"),
            TermitoonError::serialization("a"),
            TermitoonError::validation("a"),
            TermitoonError::storage_backend_not_found("a"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_io_error_maps_to_file_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TermitoonError = io.into();
        assert!(matches!(err, TermitoonError::FileOperation(_)));
        assert_eq!(err.to_string(), "File Operation Error: denied");
    }
}
