//! Default sample collection.
//!
//! Shown on first run and whenever nothing usable is stored, so a new user
//! sees a populated board instead of an empty one.

use jobtrack_core::application::{ApplicationDraft, ApplicationRecord, ApplicationStatus};

/// Returns the fixed sample collection: six records with ids 1 through 6.
pub fn default_applications() -> Vec<ApplicationRecord> {
    let samples = [
        ApplicationDraft::new("TechCorp Solutions", "Senior Frontend Developer", "2024-01-15")
            .with_status(ApplicationStatus::Interview)
            .with_details(
                "Applied through LinkedIn. Had initial phone screening with HR manager Sarah \
                 Johnson. Technical interview scheduled for next week with the engineering \
                 team. Company focuses on fintech solutions and uses React/TypeScript stack.",
            ),
        ApplicationDraft::new("StartupXYZ", "Full Stack Engineer", "2024-01-10")
            .with_status(ApplicationStatus::Applied)
            .with_details(
                "Found through AngelList job board. Remote-first company with flexible hours. \
                 Tech stack includes Node.js, React, and PostgreSQL. Team of 15 developers, \
                 Series A funding.",
            ),
        ApplicationDraft::new("BigTech Inc.", "React Developer", "2024-01-05")
            .with_status(ApplicationStatus::Offer)
            .with_details(
                "Completed all interview rounds successfully! Received offer letter with \
                 competitive salary ($120k base + equity). Benefits include health insurance, \
                 401k matching, and unlimited PTO. Start date: February 1st.",
            ),
        ApplicationDraft::new("Digital Agency Pro", "Frontend Developer", "2024-01-12")
            .with_status(ApplicationStatus::Rejected)
            .with_details(
                "Applied for agency position. Had technical interview but they were looking \
                 for someone with more Vue.js experience. Good feedback received, will keep \
                 in touch for future opportunities.",
            ),
        ApplicationDraft::new("E-commerce Platform", "Senior UI/UX Developer", "2024-01-08")
            .with_status(ApplicationStatus::Interview)
            .with_details(
                "Second round interview completed. Met with design team and product manager. \
                 Discussed portfolio and previous e-commerce projects. Final decision expected \
                 by end of week.",
            ),
        ApplicationDraft::new("Healthcare Tech", "React Native Developer", "2024-01-03")
            .with_status(ApplicationStatus::Applied)
            .with_details(
                "Healthcare startup focused on patient management apps. Remote position with \
                 occasional office visits. Tech stack: React Native, Firebase, TypeScript. \
                 Mission-driven company.",
            ),
    ];

    samples
        .into_iter()
        .zip(1u64..)
        .map(|(draft, id)| ApplicationRecord::from_draft(id, draft))
        .collect()
}
