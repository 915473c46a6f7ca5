use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Missing required argument: <limit>")]
    MissingLimit,

    #[error("Invalid limit '{value}': {reason}")]
    InvalidLimit { value: String, reason: String },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Count mismatch with {threads} threads: expected {expected}, found {found}")]
    CountMismatch {
        threads: usize,
        expected: u64,
        found: u64,
    },
}

impl BenchError {
    /// 所有錯誤都以狀態碼 1 結束
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Line printed on stdout for the user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BenchError::MissingLimit => "Falta el argumento <limit>.".to_string(),
            BenchError::InvalidLimit { .. } => {
                "El límite debe ser un entero mayor que 1.".to_string()
            }
            BenchError::ThreadPool(e) => {
                format!("No se pudo crear el pool de threads: {}", e)
            }
            BenchError::Serialization(e) => format!("Error al generar el JSON: {}", e),
            BenchError::ConfigError { message } => format!("Configuración inválida: {}", message),
            BenchError::CountMismatch {
                threads,
                expected,
                found,
            } => format!(
                "Conteo inconsistente con {} threads: {} en lugar de {}",
                threads, found, expected
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_limit_message_mentions_lower_bound() {
        let err = BenchError::InvalidLimit {
            value: "1".to_string(),
            reason: "must be at least 2".to_string(),
        };
        assert!(err.user_friendly_message().contains("mayor que 1"));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Invalid limit '1': must be at least 2");
    }

    #[test]
    fn test_missing_limit_exit_code() {
        assert_eq!(BenchError::MissingLimit.exit_code(), 1);
    }
}
