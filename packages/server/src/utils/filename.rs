use rand::Rng;

/// Characters used in generated names (URL- and key-safe).
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of the random part of a generated name. 64^12 = 2^72 possibilities.
pub const ID_LENGTH: usize = 12;

/// Extension attached to every stored video, whatever the upload was called.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Generate a random identifier of `len` characters drawn from [`ALPHABET`].
pub fn random_id(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generate the stored filename for a new upload, e.g. `V1StGXR8_Z5j.mp4`.
pub fn generate_video_filename() -> String {
    format!("{}.{}", random_id(ID_LENGTH), VIDEO_EXTENSION)
}

/// Whether `name` has the shape produced by [`generate_video_filename`].
pub fn is_generated_video_filename(name: &str) -> bool {
    let Some((id, ext)) = name.rsplit_once('.') else {
        return false;
    };
    ext == VIDEO_EXTENSION && id.len() == ID_LENGTH && id.bytes().all(|b| ALPHABET.contains(&b))
}
