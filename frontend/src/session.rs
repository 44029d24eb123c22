use crate::error::AppError;
use shared::{FashAiRequest, Gender};

pub const DEFAULT_OUTFIT: &str = "Modern outfit";
pub const RATIO: &str = "4:5";

/// Where the current generation attempt stands. Transitions are driven
/// exclusively through [`Session`] methods so the lifecycle stays testable
/// without a rendered page.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded { image_url: String },
    Failed { message: String },
}

/// Everything the user has chosen so far: the uploaded photo (as a data
/// URL), gender, occasion tag, and the state of the current submission.
/// Lives for the page lifetime; nothing is persisted.
pub struct Session {
    image: Option<String>,
    gender: Option<Gender>,
    occasion: Option<String>,
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            image: None,
            gender: None,
            occasion: None,
            phase: Phase::Idle,
        }
    }
}

impl Session {
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn occasion(&self) -> Option<&str> {
        self.occasion.as_deref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// URL of the generated look, available only in the succeeded state.
    /// Download is driven off this accessor, so resetting the session also
    /// disarms the download button.
    pub fn result_url(&self) -> Option<&str> {
        match &self.phase {
            Phase::Succeeded { image_url } => Some(image_url),
            _ => None,
        }
    }

    /// Stores the decoded upload. Replaces any previous image; selections
    /// and the current phase are untouched.
    pub fn set_image(&mut self, data_url: String) {
        self.image = Some(data_url);
    }

    /// Picks a gender. Switching invalidates the occasion selection because
    /// each gender renders its own tag list.
    pub fn select_gender(&mut self, gender: Gender) {
        if self.gender != Some(gender) {
            self.occasion = None;
        }
        self.gender = Some(gender);
    }

    /// Single-select toggle: clicking the active tag deselects it, clicking
    /// another moves the selection.
    pub fn toggle_occasion(&mut self, occasion: &str) {
        if self.occasion.as_deref() == Some(occasion) {
            self.occasion = None;
        } else {
            self.occasion = Some(occasion.to_string());
        }
    }

    /// Validates and enters the submitting phase, producing the request to
    /// send. Without an uploaded photo this fails and the phase is left
    /// unchanged, so no request goes out.
    pub fn begin_submission(&mut self, form: &StyleForm) -> Result<FashAiRequest, AppError> {
        let image = self.image.clone().ok_or(AppError::NoImageSelected)?;
        self.phase = Phase::Submitting;
        Ok(build_request(image, self.occasion.as_deref(), form))
    }

    /// Terminal transition out of `Submitting`. Every completion path of a
    /// submission funnels through here, which is what guarantees the loader
    /// and the generate button are restored no matter the outcome.
    pub fn finish(&mut self, outcome: Result<String, AppError>) {
        self.phase = match outcome {
            Ok(image_url) => Phase::Succeeded { image_url },
            Err(err) => Phase::Failed {
                message: err.to_string(),
            },
        };
    }

    /// "Try again": back to idle. The uploaded image and the gender and
    /// occasion selections survive; only the result state is dropped.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

/// Free-text style preferences mirrored from the form inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleForm {
    pub outfit: String,
    pub fit: String,
    pub color: String,
    pub accessories: String,
    pub vibe: String,
    pub aesthetic: String,
    pub variation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormField {
    Outfit,
    Fit,
    Color,
    Accessories,
    Vibe,
    Aesthetic,
}

impl StyleForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Outfit => self.outfit = value,
            FormField::Fit => self.fit = value,
            FormField::Color => self.color = value,
            FormField::Accessories => self.accessories = value,
            FormField::Vibe => self.vibe = value,
            FormField::Aesthetic => self.aesthetic = value,
        }
    }
}

pub fn build_request(image: String, occasion: Option<&str>, form: &StyleForm) -> FashAiRequest {
    FashAiRequest {
        image,
        outfit: non_blank(&form.outfit).unwrap_or_else(|| DEFAULT_OUTFIT.to_string()),
        occasion: occasion.map(str::to_string),
        fit: non_blank(&form.fit),
        color: non_blank(&form.color),
        accessories: split_accessories(&form.accessories),
        vibe: non_blank(&form.vibe),
        aesthetic: non_blank(&form.aesthetic),
        variation: form.variation,
        ratio: RATIO.to_string(),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Comma-separated accessories become a trimmed list; an effectively empty
/// field becomes `None` rather than an empty list.
pub fn split_accessories(raw: &str) -> Option<Vec<String>> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::occasions_for;

    fn session_with_image() -> Session {
        let mut session = Session::default();
        session.set_image("data:image/png;base64,abc".into());
        session
    }

    #[test]
    fn image_survives_until_replaced() {
        let mut session = Session::default();
        assert_eq!(session.image(), None);
        session.set_image("data:image/png;base64,abc".into());
        assert_eq!(session.image(), Some("data:image/png;base64,abc"));
    }

    #[test]
    fn switching_gender_clears_occasion_and_swaps_tag_list() {
        let mut session = Session::default();
        session.select_gender(Gender::Male);
        session.toggle_occasion("College");
        assert_eq!(session.occasion(), Some("College"));
        assert!(occasions_for(session.gender().unwrap()).contains(&"College"));

        session.select_gender(Gender::Female);
        assert_eq!(session.occasion(), None);
        assert!(!occasions_for(session.gender().unwrap()).contains(&"College"));
    }

    #[test]
    fn reselecting_same_gender_keeps_occasion() {
        let mut session = Session::default();
        session.select_gender(Gender::Female);
        session.toggle_occasion("Brunch");
        session.select_gender(Gender::Female);
        assert_eq!(session.occasion(), Some("Brunch"));
    }

    #[test]
    fn occasion_toggle_deselects_and_moves() {
        let mut session = Session::default();
        session.select_gender(Gender::Male);
        session.toggle_occasion("Wedding");
        assert_eq!(session.occasion(), Some("Wedding"));
        session.toggle_occasion("Wedding");
        assert_eq!(session.occasion(), None);
        session.toggle_occasion("Wedding");
        session.toggle_occasion("Festive");
        assert_eq!(session.occasion(), Some("Festive"));
    }

    #[test]
    fn submission_without_image_is_rejected_and_stays_idle() {
        let mut session = Session::default();
        let err = session.begin_submission(&StyleForm::default()).unwrap_err();
        assert_eq!(err, AppError::NoImageSelected);
        assert_eq!(session.phase(), &Phase::Idle);
    }

    #[test]
    fn submission_enters_submitting_with_built_request() {
        let mut session = session_with_image();
        session.select_gender(Gender::Male);
        session.toggle_occasion("Date Night");

        let form = StyleForm {
            outfit: "  ".into(),
            accessories: " watch , , sunglasses ".into(),
            variation: true,
            ..StyleForm::default()
        };
        let request = session.begin_submission(&form).unwrap();

        assert!(session.is_submitting());
        assert_eq!(request.outfit, DEFAULT_OUTFIT);
        assert_eq!(request.occasion.as_deref(), Some("Date Night"));
        assert_eq!(request.fit, None);
        assert_eq!(
            request.accessories,
            Some(vec!["watch".to_string(), "sunglasses".to_string()])
        );
        assert!(request.variation);
        assert_eq!(request.ratio, RATIO);
    }

    #[test]
    fn blank_accessories_become_none() {
        assert_eq!(split_accessories(""), None);
        assert_eq!(split_accessories(" , ,, "), None);
    }

    #[test]
    fn every_outcome_leaves_submitting() {
        let mut session = session_with_image();
        session.begin_submission(&StyleForm::default()).unwrap();
        session.finish(Ok("https://cdn/look.png".into()));
        assert!(!session.is_submitting());

        session.begin_submission(&StyleForm::default()).unwrap();
        session.finish(Err(AppError::MissingImageUrl));
        assert!(!session.is_submitting());
    }

    #[test]
    fn success_exposes_result_url_for_download() {
        let mut session = session_with_image();
        session.begin_submission(&StyleForm::default()).unwrap();
        session.finish(Ok("https://cdn/look.png".into()));
        assert_eq!(session.result_url(), Some("https://cdn/look.png"));
    }

    #[test]
    fn failure_carries_the_server_message() {
        let mut session = session_with_image();
        session.begin_submission(&StyleForm::default()).unwrap();
        session.finish(Err(AppError::Generation("bad input".into())));
        assert_eq!(
            session.phase(),
            &Phase::Failed {
                message: "bad input".to_string()
            }
        );
    }

    #[test]
    fn reset_clears_result_but_keeps_upload_and_selections() {
        let mut session = session_with_image();
        session.select_gender(Gender::Female);
        session.toggle_occasion("Office");
        session.begin_submission(&StyleForm::default()).unwrap();
        session.finish(Ok("https://cdn/look.png".into()));

        session.reset();
        assert_eq!(session.phase(), &Phase::Idle);
        assert_eq!(session.result_url(), None);
        assert!(session.image().is_some());
        assert_eq!(session.gender(), Some(Gender::Female));
        assert_eq!(session.occasion(), Some("Office"));
    }
}
