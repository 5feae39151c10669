// Onboarding: profile capture (industry, experience, bio, skills) and status.

pub mod handlers;
pub mod profile;
