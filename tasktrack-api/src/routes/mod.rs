/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Create, list and delete users
/// - `categories`: Create, list and delete categories
/// - `tasks`: Create, filter, update and delete tasks
///
/// Every handler makes exactly one data access call and wraps the result in
/// a JSON response.

pub mod categories;
pub mod health;
pub mod tasks;
pub mod users;
