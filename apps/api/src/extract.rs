use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` whose rejections render through `AppError`, so a malformed body
/// gets the same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
