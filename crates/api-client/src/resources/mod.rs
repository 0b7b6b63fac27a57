//! Per-resource API implementations
//!
//! Each module provides a typed interface for one remote entity, built
//! entirely on the shared client primitives (`request`, `upload`,
//! `download`); no resource issues its own HTTP calls.
//!
//! | Module | Path segment | Operations |
//! |--------|--------------|------------|
//! | `applicants` | `applicants` | create, find, update, delete, restore, list |
//! | `documents` | `documents` | upload, download, find, list |
//! | `live_photos` | `live_photos` | upload, download, find, list |
//! | `live_videos` | `live_videos` | download, frame, find, list |
//! | `checks` | `checks` | create, find, list, resume |
//! | `reports` | `reports` | find, list, resume, cancel |
//! | `addresses` | `addresses` | pick |
//! | `webhooks` | `webhooks` | create, find, update, delete, list |
//! | `sdk_tokens` | `sdk_token` | generate |
//! | `extractions` | `extractions` | extract |

pub mod addresses;
pub mod applicants;
pub mod checks;
pub mod documents;
pub mod extractions;
pub mod live_photos;
pub mod live_videos;
pub mod reports;
pub mod sdk_tokens;
pub mod webhooks;

pub use addresses::AddressesApi;
pub use applicants::ApplicantsApi;
pub use checks::ChecksApi;
pub use documents::DocumentsApi;
pub use extractions::ExtractionsApi;
pub use live_photos::LivePhotosApi;
pub use live_videos::LiveVideosApi;
pub use reports::ReportsApi;
pub use sdk_tokens::SdkTokensApi;
pub use webhooks::WebhooksApi;

/// Shorthand for passing no body or query to the client primitives.
pub(crate) const NONE: Option<&()> = None;
