/// Generate a unique ID for a document.
///
/// Returns a 23-character URL-friendly string. IDs are never reused within
/// a process; the alphabet and length make collisions negligible.
pub fn generate_id() -> String {
    nanoid::nanoid!(23)
}
