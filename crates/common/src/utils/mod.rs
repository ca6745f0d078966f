/// Input/output utilities for file manipulation.
pub mod io;

/// Path normalization and containment helpers.
pub mod path;

/// Threading and multi-threading utilities.
pub mod threading;
