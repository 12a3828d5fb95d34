// Test vectors module for interoperability testing
// Known-answer vectors for checking this implementation against others

pub mod aes_gcm;
