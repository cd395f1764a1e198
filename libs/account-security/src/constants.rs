/// Reserved bare username of the super identity.
///
/// Only this identity may address users of a foreign tenant by an explicit
/// tenant qualifier. Compared case-insensitively.
pub const ROOT_NAME: &str = "root";

/// Separator between the bare username and the tenant qualifier
/// (`alice@tenant7`).
pub const TENANT_SEPARATOR: char = '@';
