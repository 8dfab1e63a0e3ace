//! Process-wide TLS setup for outbound HTTPS.

/// Install the ring crypto provider used by reqwest's rustls backend.
///
/// Safe to call repeatedly; only the first call installs the provider.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
