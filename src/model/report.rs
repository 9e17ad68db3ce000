use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ReportStatus { Pending, Reviewed, Accepted, Rejected }
impl std::fmt::Display for ReportStatus {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt,"{:?}", self)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ReportAction { Accept, Reject }
impl std::fmt::Display for ReportAction {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt,"{:?}", self)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ReportedKind { Post, Comment }
impl std::fmt::Display for ReportedKind {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      ReportedKind::Post => write!(fmt, "post"),
      ReportedKind::Comment => write!(fmt, "comment"),
    }
  }
}

//report
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Report {
  pub uuid: String,
  pub reporter: String,
  pub reason: String,
  pub post_id: Option<String>,
  pub comment_id: Option<String>,
  //copied from the reported content's owning fandom at creation
  pub fandom_id: String,
  pub status: ReportStatus,
  pub created_at: i64,
  pub reviewed_at: Option<i64>,
  pub reviewed_by: Option<String>,
}

impl Report {
  pub fn kind(&self) -> ReportedKind {
    match self.post_id {
      Some(_) => ReportedKind::Post,
      None => ReportedKind::Comment,
    }
  }
}

//exactly one of the two references may be set
pub fn validate_target(
  post_id: &Option<String>,
  comment_id: &Option<String>,
) -> Result<ReportedKind, String> {
  match (post_id, comment_id) {
    (Some(_), Some(_)) => Err(
      "a report must reference a post or a comment, not both".to_string()
    ),
    (None, None) => Err(
      "a report must reference a post or a comment".to_string()
    ),
    (Some(_), None) => Ok(ReportedKind::Post),
    (None, Some(_)) => Ok(ReportedKind::Comment),
  }
}

//shown to the reviewer before anything happens; accept and reject must
//not share wording
pub fn confirmation_prompt(
  action: &ReportAction,
  kind: &ReportedKind,
  author_handle: &str,
) -> String {
  match action {
    ReportAction::Accept => format!(
      "Accept this report? The {} by @{} will be permanently removed.",
      kind, author_handle,
    ),
    ReportAction::Reject => format!(
      "Reject this report? No action will be taken against the {} by @{}.",
      kind, author_handle,
    ),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn target_must_be_exactly_one_reference() {
    let post = Some("post-1".to_string());
    let comment = Some("comment-1".to_string());

    assert!(validate_target(&post, &comment).is_err());
    assert!(validate_target(&None, &None).is_err());
    assert_eq!(validate_target(&post, &None).unwrap(), ReportedKind::Post);
    assert_eq!(
      validate_target(&None, &comment).unwrap(),
      ReportedKind::Comment
    );
  }

  #[test]
  fn report_kind_follows_the_set_reference() {
    let report = Report {
      uuid: "r-1".to_string(),
      reporter: "user-1".to_string(),
      reason: "spam".to_string(),
      post_id: None,
      comment_id: Some("comment-1".to_string()),
      fandom_id: "fandom-1".to_string(),
      status: ReportStatus::Pending,
      created_at: 0,
      reviewed_at: None,
      reviewed_by: None,
    };

    assert_eq!(report.kind(), ReportedKind::Comment);
  }

  #[test]
  fn accept_prompt_warns_about_removal() {
    let prompt = confirmation_prompt(
      &ReportAction::Accept,
      &ReportedKind::Post,
      "jiwoo_fan",
    );

    assert!(prompt.contains("post"));
    assert!(prompt.contains("@jiwoo_fan"));
    assert!(prompt.contains("removed"));
  }

  #[test]
  fn reject_prompt_warns_no_action() {
    let prompt = confirmation_prompt(
      &ReportAction::Reject,
      &ReportedKind::Comment,
      "jiwoo_fan",
    );

    assert!(prompt.contains("comment"));
    assert!(prompt.contains("@jiwoo_fan"));
    assert!(prompt.contains("No action"));
  }

  #[test]
  fn accept_and_reject_wording_differ() {
    let accept = confirmation_prompt(
      &ReportAction::Accept,
      &ReportedKind::Post,
      "someone",
    );
    let reject = confirmation_prompt(
      &ReportAction::Reject,
      &ReportedKind::Post,
      "someone",
    );

    assert_ne!(accept, reject);
  }
}
