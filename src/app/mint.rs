use anyhow::Result;

use crate::app::feedback::Feedback;
use crate::app::form::{MintForm, MintRequest};
use crate::image;
use crate::utils::explorer_tx_url;

pub const MSG_NOT_CONNECTED: &str = "Please connect your wallet";
pub const MSG_SUCCESS: &str = "Minting succeeded!";
pub const MSG_INCOMPLETE: &str = "Please fill in all required fields";

/// Seam to the wallet connector: signs and broadcasts one call description,
/// resolving with the transaction digest or rejecting with an error.
#[allow(async_fn_in_trait)]
pub trait MintSigner {
    async fn sign_and_submit(&self, request: &MintRequest) -> Result<String>;
}

/// Drive one mint submission end to end. Exactly one signer invocation per
/// call, no implicit retries. On success the form is reset; on failure it is
/// left untouched so the user can correct and resubmit.
pub async fn run_mint<S: MintSigner>(
    signer: &S,
    form: &mut MintForm,
    connected: bool,
    network: &str,
    explorer_host: &str,
) -> Feedback {
    if !connected {
        return Feedback::error(MSG_NOT_CONNECTED);
    }
    let Some(request) = form.to_request() else {
        return Feedback::error(MSG_INCOMPLETE);
    };

    // Embed local image files before the call leaves the machine; URLs pass
    // through unchanged.
    let request = match image::resolve_reference(&request.image_reference).await {
        Ok(image_reference) => MintRequest {
            image_reference,
            ..request
        },
        Err(e) => return Feedback::error(format!("Minting failed: {}", e)),
    };

    match signer.sign_and_submit(&request).await {
        Ok(digest) => {
            form.reset();
            Feedback::success(
                MSG_SUCCESS,
                explorer_tx_url(explorer_host, &digest, network),
            )
        }
        Err(e) => Feedback::error(format!("Minting failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feedback::FeedbackKind;
    use crate::app::form::FormField;
    use crate::config::AppConfig;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockSigner {
        outcome: Result<String, String>,
        calls: AtomicUsize,
    }

    impl MockSigner {
        fn resolving(digest: &str) -> Self {
            MockSigner {
                outcome: Ok(digest.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting(message: &str) -> Self {
            MockSigner {
                outcome: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MintSigner for MockSigner {
        async fn sign_and_submit(&self, _request: &MintRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(digest) => Ok(digest.clone()),
                Err(message) => Err(anyhow!("{}", message)),
            }
        }
    }

    fn filled_form() -> MintForm {
        let mut form = MintForm::new(&AppConfig::default());
        form.set_field(FormField::RecipientAddress, "0xabc");
        form.set_field(FormField::ImageReference, "https://x/y.png");
        form.set_field(FormField::Name, "Card");
        form.set_field(FormField::Description, "Demo");
        form.set_field(FormField::TargetPackage, "0x1");
        form
    }

    #[tokio::test]
    async fn successful_mint_resets_form_and_links_digest() {
        let signer = MockSigner::resolving("0xdigest123");
        let mut form = filled_form();

        let feedback = run_mint(
            &signer,
            &mut form,
            true,
            "testnet",
            "https://suiexplorer.com",
        )
        .await;

        assert_eq!(signer.call_count(), 1);
        assert_eq!(feedback.kind(), Some(FeedbackKind::Success));
        match &feedback {
            Feedback::Open {
                message,
                detail_link,
                ..
            } => {
                assert_eq!(message, MSG_SUCCESS);
                let link = detail_link.as_deref().unwrap();
                assert!(link.contains("0xdigest123"));
                assert_eq!(
                    link,
                    "https://suiexplorer.com/txblock/0xdigest123?network=testnet"
                );
            }
            Feedback::Closed => panic!("expected open feedback"),
        }
        for field in FormField::USER_FIELDS {
            assert_eq!(form.field(field), "");
        }
    }

    #[tokio::test]
    async fn rejected_mint_keeps_form_and_surfaces_raw_error() {
        let signer = MockSigner::rejecting("insufficient gas");
        let mut form = filled_form();
        let before = form.clone();

        let feedback = run_mint(
            &signer,
            &mut form,
            true,
            "testnet",
            "https://suiexplorer.com",
        )
        .await;

        assert_eq!(signer.call_count(), 1);
        assert_eq!(feedback.kind(), Some(FeedbackKind::Error));
        match &feedback {
            Feedback::Open { message, .. } => {
                assert!(message.starts_with("Minting failed: "));
                assert!(message.contains("insufficient gas"));
            }
            Feedback::Closed => panic!("expected open feedback"),
        }
        assert_eq!(form, before);
    }

    #[tokio::test]
    async fn disconnected_wallet_never_reaches_the_signer() {
        let signer = MockSigner::resolving("0xdigest123");
        let mut form = filled_form();

        let feedback = run_mint(
            &signer,
            &mut form,
            false,
            "testnet",
            "https://suiexplorer.com",
        )
        .await;

        assert_eq!(signer.call_count(), 0);
        assert_eq!(feedback.kind(), Some(FeedbackKind::Error));
        match &feedback {
            Feedback::Open { message, .. } => assert_eq!(message, MSG_NOT_CONNECTED),
            Feedback::Closed => panic!("expected open feedback"),
        }
    }

    #[tokio::test]
    async fn incomplete_form_never_reaches_the_signer() {
        let signer = MockSigner::resolving("0xdigest123");
        let mut form = filled_form();
        form.set_field(FormField::Name, "   ");

        let feedback = run_mint(
            &signer,
            &mut form,
            true,
            "testnet",
            "https://suiexplorer.com",
        )
        .await;

        assert_eq!(signer.call_count(), 0);
        assert_eq!(feedback.kind(), Some(FeedbackKind::Error));
    }

    #[tokio::test]
    async fn unreadable_image_file_fails_before_signing() {
        let signer = MockSigner::resolving("0xdigest123");
        let mut form = filled_form();
        form.set_field(FormField::ImageReference, "/no/such/file.png");

        let feedback = run_mint(
            &signer,
            &mut form,
            true,
            "testnet",
            "https://suiexplorer.com",
        )
        .await;

        assert_eq!(signer.call_count(), 0);
        assert_eq!(feedback.kind(), Some(FeedbackKind::Error));
        // Form preserved for correction.
        assert_eq!(form.field(FormField::Name), "Card");
    }
}
