use std::future::Future;
use serde::Serialize;

//ordered multi-write workflows run through this instead of a transaction;
//a failure keeps every earlier write and names the step that broke
pub struct StepSequence {
    name: &'static str,
    completed: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepFailure {
    pub sequence: &'static str,
    pub step: &'static str,
    pub completed: Vec<&'static str>,
    pub message: String,
}

impl std::fmt::Display for StepFailure {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fmt,
            "sequence '{}' failed at step '{}' (completed: [{}]): {}",
            self.sequence,
            self.step,
            self.completed.join(", "),
            self.message,
        )
    }
}

impl StepSequence {
    pub fn new(name: &'static str) -> StepSequence {
        StepSequence {
            name,
            completed: Vec::new(),
        }
    }

    pub async fn run<T>(
        &mut self,
        step: &'static str,
        task: impl Future<Output = Result<T, String>>,
    ) -> Result<T, StepFailure> {
        match task.await {
            Ok(value) => {
                self.completed.push(step);
                Ok(value)
            },
            Err(message) => Err(StepFailure {
                sequence: self.name,
                step,
                completed: self.completed.clone(),
                message,
            }),
        }
    }

    pub fn completed(&self) -> &[&'static str] {
        &self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_steps_in_order() {
        let mut sequence = StepSequence::new("provision");

        sequence.run("first", async { Ok::<_, String>(1) }).await.unwrap();
        sequence.run("second", async { Ok::<_, String>(2) }).await.unwrap();

        assert_eq!(sequence.completed(), &["first", "second"]);
    }

    #[tokio::test]
    async fn failure_names_step_and_completed_prefix() {
        let mut sequence = StepSequence::new("provision");

        sequence.run("first", async { Ok::<_, String>(()) }).await.unwrap();

        let failure = sequence
            .run("second", async {
                Err::<(), String>("boom".to_string())
            })
            .await
            .unwrap_err();

        assert_eq!(failure.sequence, "provision");
        assert_eq!(failure.step, "second");
        assert_eq!(failure.completed, vec!["first"]);
        assert_eq!(failure.message, "boom");

        //the failed step is not recorded as completed
        assert_eq!(sequence.completed(), &["first"]);
    }

    #[tokio::test]
    async fn failure_display_is_precise() {
        let mut sequence = StepSequence::new("review");

        let failure = sequence
            .run("remove-content", async {
                Err::<(), String>("row gone".to_string())
            })
            .await
            .unwrap_err();

        let text = failure.to_string();
        assert!(text.contains("review"));
        assert!(text.contains("remove-content"));
        assert!(text.contains("row gone"));
    }
}
