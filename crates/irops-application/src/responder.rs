//! Conversational responder with canned fallback.
//!
//! Each call is one full turn: attempt the completion endpoint, substitute
//! a canned answer when it cannot serve, and record both sides of the
//! exchange on the session transcript. Exactly one user and one assistant
//! entry are appended per call, whichever path produced the answer.

use crate::canned;
use irops_core::model::ModelId;
use irops_core::session::{MessageRole, SessionContext};
use irops_core::source::DataOrigin;
use irops_core::{IropsError, Result};
use irops_warehouse::{CompletionGateway, CompletionPrompt, ConnectionCache, WarehouseClient};
use std::sync::Arc;

const SYSTEM_INSTRUCTIONS: &str =
    "You are an IROPS (Irregular Operations) Assistant for Phantom Airlines. Your role is to \
     help airline operations staff manage disruptions, crew assignments, and aircraft \
     availability. Focus on actionable information for operational decision-making. Format \
     responses as clear, scannable information with bullet points. Highlight critical \
     information and include relevant counts and metrics.";

/// An answer plus which path produced it.
pub struct Reply {
    pub text: String,
    pub origin: DataOrigin,
}

/// Answers operator questions over the shared connection.
pub struct Responder<G = WarehouseClient> {
    cache: Arc<ConnectionCache<G>>,
}

impl<G: CompletionGateway> Responder<G> {
    pub fn new(cache: Arc<ConnectionCache<G>>) -> Self {
        Self { cache }
    }

    /// Runs one conversation turn.
    ///
    /// `context` is an optional block of live numbers prefixed to the
    /// question so the model answers from current data.
    pub async fn respond(
        &self,
        session: &mut SessionContext,
        question: &str,
        context: Option<String>,
    ) -> Reply {
        session.append(MessageRole::User, question);

        let reply = match self
            .attempt_live(session.model, question, context.as_deref())
            .await
        {
            Ok(text) => Reply {
                text,
                origin: DataOrigin::Live,
            },
            Err(err) => {
                tracing::warn!("completion unavailable, serving canned answer: {err}");
                Reply {
                    text: canned::answer(question),
                    origin: DataOrigin::Fallback,
                }
            }
        };

        session.append(MessageRole::Assistant, reply.text.clone());
        reply
    }

    async fn attempt_live(
        &self,
        model: ModelId,
        question: &str,
        context: Option<&str>,
    ) -> Result<String> {
        let gateway = self.cache.get().await.ok_or_else(|| {
            IropsError::connection_unavailable("no warehouse connection for completion")
        })?;

        let user = match context {
            Some(context) => format!("{context}\n\n{question}"),
            None => question.to_string(),
        };

        let prompt = CompletionPrompt {
            model,
            system: SYSTEM_INSTRUCTIONS.to_string(),
            user,
        };

        gateway.complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingGateway {
        prompts: Arc<Mutex<Vec<CompletionPrompt>>>,
    }

    #[async_trait]
    impl CompletionGateway for RecordingGateway {
        async fn complete(&self, prompt: &CompletionPrompt) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.clone());
            Ok("Live answer.".to_string())
        }
    }

    fn recording_responder() -> (Responder<RecordingGateway>, Arc<Mutex<Vec<CompletionPrompt>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let captured = prompts.clone();
        let cache = Arc::new(ConnectionCache::with_connector(move || {
            Ok(RecordingGateway {
                prompts: captured.clone(),
            })
        }));
        (Responder::new(cache), prompts)
    }

    fn dead_responder() -> Responder<RecordingGateway> {
        Responder::new(Arc::new(ConnectionCache::with_connector(|| {
            Err(IropsError::connection_unavailable("warehouse down"))
        })))
    }

    #[tokio::test]
    async fn live_answers_come_from_the_gateway() {
        let (responder, prompts) = recording_responder();
        let mut session = SessionContext::new();

        let reply = responder
            .respond(&mut session, "How are we doing?", None)
            .await;

        assert_eq!(reply.text, "Live answer.");
        assert_eq!(reply.origin, DataOrigin::Live);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].content, "Live answer.");

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].user, "How are we doing?");
        assert!(prompts[0].system.contains("IROPS"));
    }

    #[tokio::test]
    async fn context_is_prefixed_to_the_user_turn() {
        let (responder, prompts) = recording_responder();
        let mut session = SessionContext::new();

        responder
            .respond(
                &mut session,
                "Where are the delays?",
                Some("1423 flights, 156 delayed.".to_string()),
            )
            .await;

        let prompts = prompts.lock().unwrap();
        assert_eq!(
            prompts[0].user,
            "1423 flights, 156 delayed.\n\nWhere are the delays?"
        );
    }

    #[tokio::test]
    async fn model_choice_follows_the_session() {
        let (responder, prompts) = recording_responder();
        let mut session = SessionContext::new();
        session.model = ModelId::MistralLarge;

        responder.respond(&mut session, "status?", None).await;

        assert_eq!(prompts.lock().unwrap()[0].model, ModelId::MistralLarge);
    }

    #[tokio::test]
    async fn dead_connections_fall_back_to_canned_answers() {
        let responder = dead_responder();
        let mut session = SessionContext::new();

        let reply = responder
            .respond(
                &mut session,
                "What is the maximum flight duty period for a pilot starting at 6am?",
                None,
            )
            .await;

        assert_eq!(reply.origin, DataOrigin::Fallback);
        assert!(reply.text.contains("Flight Duty Period"));
        assert!(reply.text.contains("FAA 14 CFR Part 117.11"));
    }

    #[tokio::test]
    async fn each_call_appends_exactly_one_exchange() {
        let responder = dead_responder();
        let mut session = SessionContext::new();

        responder.respond(&mut session, "any ghost flights?", None).await;
        responder.respond(&mut session, "crew available?", None).await;

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].role, MessageRole::User);
        assert_eq!(transcript[1].role, MessageRole::Assistant);
        assert_eq!(transcript[2].role, MessageRole::User);
        assert_eq!(transcript[3].role, MessageRole::Assistant);
        assert_eq!(transcript[2].content, "crew available?");
    }
}
