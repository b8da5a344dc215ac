#[cfg(debug_assertions)]
pub fn get_document_store_url() -> &'static str {
    "http://localhost:8080"  // Firestore emulator when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_document_store_url() -> &'static str {
    "https://firestore.googleapis.com"
}

pub const FIRESTORE_PROJECT: &str = "weboku-site";

// Phone numbers live in one document per site.
pub const PHONE_COLLECTION: &str = "siteNumbers";
pub const SITE_ID: &str = "weboku.com";

pub fn phone_document_url() -> String {
    format!(
        "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
        get_document_store_url(),
        FIRESTORE_PROJECT,
        PHONE_COLLECTION,
        urlencoding::encode(SITE_ID),
    )
}
