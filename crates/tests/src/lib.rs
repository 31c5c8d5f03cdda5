#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod catalog_tests;

#[cfg(test)]
mod content_tests;

#[cfg(test)]
mod user_tests;

#[cfg(test)]
mod manuscript_tests;

#[cfg(test)]
mod error_tests;

#[cfg(test)]
mod session_flow_tests;
