/// A stored user record.
///
/// `password` is kept in plain form and must never appear in a response
/// payload - response shapes live in the service layer and carry only
/// `id`/`name`.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub password: String,
}
