use crate::utils::{AppError, ExpressionCache};

/// Evaluates sum/difference expressions, memoizing results by the literal
/// expression string.
#[derive(Debug, Default)]
pub struct Evaluator {
    cache: ExpressionCache,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: ExpressionCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &ExpressionCache {
        &self.cache
    }

    pub fn evaluate(&self, expr: &str) -> Result<i64, AppError> {
        if let Some(result) = self.cache.get(expr) {
            log::debug!("cache hit for '{}'", expr);
            return Ok(result);
        }

        log::debug!("cache miss for '{}'", expr);
        let result = compute(expr)?;
        self.cache.insert(expr.to_string(), result);

        Ok(result)
    }
}

/// Single left-to-right pass; spaces count as `+`.
///
/// Overflow wraps rather than being detected.
pub fn compute(expr: &str) -> Result<i64, AppError> {
    let mut total: i64 = 0;
    let mut current: i64 = 0;
    let mut sign: i64 = 1;

    for c in expr.chars() {
        match c {
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                current = current.wrapping_mul(10).wrapping_add(digit);
            }
            '+' | ' ' | '-' => {
                total = total.wrapping_add(sign.wrapping_mul(current));
                current = 0;
                sign = if c == '-' { -1 } else { 1 };
            }
            other => return Err(AppError::InvalidCharacter(other)),
        }
    }

    Ok(total.wrapping_add(sign.wrapping_mul(current)))
}
