/// Errors surfaced to the user as blocking notices.
///
/// These are checked before an operation touches any state, so seeing one
/// means nothing was calculated, written or deleted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateSetError {
    /// No day 1 date was given.
    #[error("please select a date for day 1")]
    MissingAnchor,

    /// The day 1 date could not be read as `YYYY-MM-DD`.
    #[error("`{raw}` is not a valid day 1 date (expected YYYY-MM-DD)")]
    InvalidAnchor { raw: String },

    #[error("there is no data to save, calculate the dates first")]
    NothingToSave,

    #[error("there is no data to export, calculate the dates first")]
    NothingToExport,

    /// Load or delete was requested without picking a saved date set.
    #[error("please select a saved date set first")]
    NoSelection,

    #[error("could not load saved date set `{id}`, try deleting it and saving it again")]
    NotFound { id: String },

    /// A stored record lacks its day 1 date or its dates.
    #[error("saved date set `{id}` is incomplete, please delete it and save it again")]
    IncompleteRecord { id: String },
}
