use crate::{
    ai::{ClassifyError, EmailClassifier},
    domain::{Category, EmailInput, Lead, Priority},
};

/// Outcome of one batch run. `leads` holds successes in input order;
/// `skipped` records every dropped input with the reason, so the output
/// never shrinks silently.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub leads: Vec<Lead>,
    pub skipped: Vec<SkippedEmail>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.leads.len()
    }

    pub fn high_priority_count(&self) -> usize {
        self.leads
            .iter()
            .filter(|lead| lead.priority == Priority::High)
            .count()
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.leads
            .iter()
            .filter(|lead| lead.category == category)
            .count()
    }
}

#[derive(Debug)]
pub struct SkippedEmail {
    pub id: String,
    pub subject: String,
    pub error: ClassifyError,
}

/// Classifies `emails` strictly sequentially, one request at a time.
///
/// A per-item failure is recorded in the skipped list and never aborts
/// the batch; no retries are attempted. `progress` is called after each
/// item with `(done, total)` and carries no correctness weight.
pub async fn run_batch<C, F>(classifier: &C, emails: &[EmailInput], mut progress: F) -> BatchOutcome
where
    C: EmailClassifier,
    F: FnMut(usize, usize),
{
    let total = emails.len();
    let mut outcome = BatchOutcome {
        leads: Vec::with_capacity(total),
        skipped: Vec::new(),
    };

    for (index, email) in emails.iter().enumerate() {
        match classifier.classify(&email.subject, &email.body).await {
            Ok(classification) => {
                outcome.leads.push(Lead::from_classification(email, classification));
            }
            Err(error) => {
                tracing::warn!(
                    target: "batch",
                    id = %email.id,
                    kind = error.kind(),
                    error = %error,
                    "email skipped"
                );
                outcome.skipped.push(SkippedEmail {
                    id: email.id.clone(),
                    subject: email.subject.clone(),
                    error,
                });
            }
        }
        progress(index + 1, total);
    }

    outcome
}
