//! folio 固有のドメイン型（型と不変条件）

pub mod collection;
pub mod command;
pub mod contact;
pub mod entry;
pub mod form;
pub mod outcome;
pub mod remote_error;
pub mod seed;

pub use collection::{Collection, Resource};
pub use command::FolioCommand;
pub use contact::{ContactForm, SignupForm};
pub use entry::{Entry, EntryDetails, EntryPatch, Origin, ProjectDetails, ServiceDetails};
pub use form::{FieldOverrides, FormFields, FormMode};
pub use outcome::{DeleteOutcome, LocalStatus, RemoteStatus, SubmitOutcome, WriteOutcome};
pub use remote_error::RemoteError;
pub use seed::seed_entries;
