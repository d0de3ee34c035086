/*!
# Algorithms

Read-only analyses over the shared contract. Every algorithm works on any
conforming representation through [`crate::ops`] bounds and never mutates the
graph it inspects.

Currently provided: connectivity checks via two independent strategies, see
[`Connectivity`].
*/

pub mod connectivity;

pub use connectivity::Connectivity;
