//! Extractors whose rejections go through [`AppError`].
//!
//! Axum's stock `Json` and `Path` answer bad input with their own status
//! codes and bodies. These wrappers route the rejection into the shared
//! error mapping instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with an [`AppError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
