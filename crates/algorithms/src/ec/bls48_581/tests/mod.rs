//! BLS48-581 test suite
//!
//! Tests are organized into focused modules for better maintainability.
//! Randomness comes from a seeded ChaCha20 stream so failures reproduce.


#[cfg(test)]
mod groups;

#[cfg(test)]
mod pairings;

#[cfg(test)]
mod scalar_mul;

#[cfg(test)]
mod serialization;
