//! Locating and loading `shade.toml`.
//!
//! ```ignore
//! use shade_driver::project::{find_project_root, load_project_toml, PROJECT_FILE};
//!
//! let cwd = std::env::current_dir()?;
//! if let Some(root) = find_project_root(&cwd) {
//!     let project = load_project_toml(&root.join(PROJECT_FILE))?;
//!     println!("Project: {}", project.project.name);
//! }
//! ```

pub mod errors;
pub mod find;

pub use errors::ProjectError;
pub use find::{PROJECT_FILE, find_project_root, load_project_toml};
