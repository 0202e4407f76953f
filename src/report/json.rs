use serde::Serialize;

use crate::error::AppError;

pub fn render_json<T: Serialize>(view: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(view).map_err(|e| AppError::Render(e.to_string()))
}
