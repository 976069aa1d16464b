//! Sample inquiries for local development and demos

use tracing::info;

use inquiry_core::entities::{InquiryChanges, NewInquiry};
use inquiry_core::traits::{InquiryRepository, RepoResult};
use inquiry_core::value_objects::{Category, InquiryStatus, Priority};

/// A sample inquiry plus the workflow state it should end up in
#[derive(Debug, Clone)]
pub struct SampleInquiry {
    pub inquiry: NewInquiry,
    pub status: InquiryStatus,
    pub resolution_notes: Option<&'static str>,
}

#[allow(clippy::too_many_arguments)]
fn sample(
    name: &str,
    email: &str,
    phone: Option<&str>,
    category: Category,
    subject: &str,
    message: &str,
    status: InquiryStatus,
    priority: Priority,
    resolution_notes: Option<&'static str>,
) -> SampleInquiry {
    SampleInquiry {
        inquiry: NewInquiry {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(String::from),
            category,
            subject: subject.to_string(),
            message: message.to_string(),
            priority,
        },
        status,
        resolution_notes,
    }
}

/// Ten inquiries covering every category, status, and priority
pub fn sample_inquiries() -> Vec<SampleInquiry> {
    vec![
        sample(
            "John Smith",
            "john.smith@example.com",
            Some("+1234567890"),
            Category::Trading,
            "How to place a market order?",
            "I am new to trading and would like to understand how to place a market order for stocks. Can you provide step-by-step guidance?",
            InquiryStatus::Pending,
            Priority::Medium,
            None,
        ),
        sample(
            "Sarah Johnson",
            "sarah.j@example.com",
            Some("+1987654321"),
            Category::MarketData,
            "Real-time data subscription",
            "I need information about subscribing to real-time market data feeds. What are the available packages and pricing?",
            InquiryStatus::InProgress,
            Priority::High,
            None,
        ),
        sample(
            "Michael Chen",
            "mchen@example.com",
            None,
            Category::TechnicalIssues,
            "Unable to login to trading platform",
            "I have been trying to login to the trading platform for the past hour but keep getting an error message. Please help urgently.",
            InquiryStatus::Resolved,
            Priority::Urgent,
            Some("Password reset link sent. User successfully logged in."),
        ),
        sample(
            "Emily Rodriguez",
            "emily.r@example.com",
            Some("+1555123456"),
            Category::GeneralQuestions,
            "Account verification process",
            "What documents are required for account verification? How long does the verification process typically take?",
            InquiryStatus::Pending,
            Priority::Low,
            None,
        ),
        sample(
            "David Wilson",
            "dwilson@example.com",
            Some("+1555987654"),
            Category::Trading,
            "Stop-loss order not executed",
            "My stop-loss order for XYZ stock was not executed even though the price reached the trigger level. Can you investigate this issue?",
            InquiryStatus::InProgress,
            Priority::Urgent,
            None,
        ),
        sample(
            "Lisa Anderson",
            "lisa.anderson@example.com",
            Some("+1555246810"),
            Category::MarketData,
            "Historical data download",
            "How can I download historical price data for the last 5 years? Is there a bulk download option available?",
            InquiryStatus::Resolved,
            Priority::Medium,
            Some("Provided instructions for bulk data export via API. User confirmed successful download."),
        ),
        sample(
            "Robert Taylor",
            "rtaylor@example.com",
            None,
            Category::TechnicalIssues,
            "Mobile app crashing on Android",
            "The mobile trading app keeps crashing whenever I try to view my portfolio on my Android device (Samsung Galaxy S21).",
            InquiryStatus::Pending,
            Priority::High,
            None,
        ),
        sample(
            "Jennifer Martinez",
            "jmartinez@example.com",
            Some("+1555369258"),
            Category::GeneralQuestions,
            "Trading hours and holidays",
            "What are the regular trading hours? Is the exchange open on public holidays?",
            InquiryStatus::Closed,
            Priority::Low,
            Some("Provided trading hours information and holiday schedule. User satisfied."),
        ),
        sample(
            "Christopher Lee",
            "clee@example.com",
            Some("+1555147258"),
            Category::Trading,
            "Margin trading requirements",
            "I would like to start margin trading. What are the requirements and what is the maximum leverage available?",
            InquiryStatus::Pending,
            Priority::Medium,
            None,
        ),
        sample(
            "Amanda White",
            "awhite@example.com",
            Some("+1555789456"),
            Category::MarketData,
            "API rate limits",
            "I am developing a trading bot and need to know what the API rate limits are for market data requests.",
            InquiryStatus::InProgress,
            Priority::Medium,
            None,
        ),
    ]
}

/// Insert the sample inquiries unless the store already holds inquiries.
///
/// Inquiries go through the normal create/update path, so resolved and
/// closed samples get `resolved_at` stamped at seeding time. Returns the
/// number of inquiries inserted.
pub async fn seed_sample_data(repo: &dyn InquiryRepository) -> RepoResult<usize> {
    let existing = repo.count_all().await?;
    if existing > 0 {
        info!(existing, "Skipping seed, inquiries already present");
        return Ok(0);
    }

    let samples = sample_inquiries();
    let count = samples.len();

    for sample in samples {
        let created = repo.create(&sample.inquiry).await?;

        // Closed inquiries pass through resolved first
        if sample.status == InquiryStatus::Closed {
            repo.update(
                created.id,
                InquiryChanges {
                    status: Some(InquiryStatus::Resolved),
                    ..Default::default()
                },
            )
            .await?;
        }

        if sample.status != InquiryStatus::Pending {
            repo.update(
                created.id,
                InquiryChanges {
                    status: Some(sample.status),
                    resolution_notes: sample.resolution_notes.map(|notes| Some(notes.to_string())),
                    ..Default::default()
                },
            )
            .await?;
        }
    }

    info!(count, "Seeded sample inquiries");
    Ok(count)
}
