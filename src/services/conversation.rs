use crate::models::{Conversation, ConversationTurn, Reply};
use crate::services::dispatch::{choose_route, Route};
use crate::services::responders;
use crate::state::AppState;

/// Handles one user utterance: records it, routes it to exactly one
/// responder and appends the assistant reply (two replies when a flight
/// status also asked for destination weather). Returns the appended
/// assistant turns.
pub async fn process_utterance(
    state: &AppState,
    conversation: &mut Conversation,
    text: &str,
) -> Vec<ConversationTurn> {
    let text = text.trim();
    conversation.push(ConversationTurn::user(text));

    let route = choose_route(text);
    tracing::info!(
        conversation = %conversation.id,
        route = route.name(),
        "processing utterance"
    );

    let replies: Vec<Reply> = match route {
        Route::FlightStatus {
            flight_number,
            with_weather,
        } => {
            let status = responders::flight_status(
                state.flights.as_ref(),
                state.weather.as_ref(),
                &flight_number,
            )
            .await;

            if with_weather {
                let weather = responders::destination_weather(state.weather.as_ref(), &status).await;
                vec![status.reply, weather]
            } else {
                vec![status.reply]
            }
        }
        Route::FlightSchedules {
            departure,
            arrival,
            date,
        } => vec![
            responders::flight_schedules(state.flights.as_ref(), &departure, &arrival, date).await,
        ],
        Route::Weather { location } => {
            vec![responders::weather_for_location(state.weather.as_ref(), &location).await]
        }
        Route::Baggage => vec![responders::baggage_policy()],
        Route::Cancellation => vec![responders::cancellation_policy()],
        Route::FrequentFlyer => vec![responders::frequent_flyer_info()],
        Route::GenericChat => vec![responders::generic_chat(state.llm.as_ref(), conversation).await],
    };

    let turns: Vec<ConversationTurn> = replies
        .into_iter()
        .map(|reply| {
            tracing::debug!(status = ?reply.status, "responder finished");
            ConversationTurn::assistant(reply.text)
        })
        .collect();

    for turn in &turns {
        conversation.push(turn.clone());
    }

    turns
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::Role;
    use crate::services::testing::{
        sample_flight, test_config, MockFlights, MockWeather, RecordingLlm,
    };

    fn test_state(flights: MockFlights) -> (AppState, Arc<RecordingLlm>) {
        let llm = Arc::new(RecordingLlm::new());
        let state = AppState::new(
            test_config(),
            Box::new(SharedLlm(Arc::clone(&llm))),
            Box::new(flights),
            Box::new(MockWeather::new()),
        );
        (state, llm)
    }

    struct SharedLlm(Arc<RecordingLlm>);

    #[async_trait::async_trait]
    impl crate::services::ai::LlmProvider for SharedLlm {
        async fn chat(
            &self,
            system_prompt: &str,
            messages: &[crate::services::ai::Message],
        ) -> anyhow::Result<String> {
            self.0.chat(system_prompt, messages).await
        }
    }

    #[tokio::test]
    async fn test_policy_question_appends_user_and_assistant() {
        let (state, llm) = test_state(MockFlights::found(vec![]));
        let mut conv = Conversation::new();

        let turns = process_utterance(&state, &mut conv, "  What is the baggage policy? ").await;

        assert_eq!(turns.len(), 1);
        assert!(turns[0].content.starts_with("**Baggage Policy Information:**"));
        let displayed = conv.displayable();
        assert_eq!(displayed.len(), 3);
        assert_eq!(displayed[1], ConversationTurn::user("What is the baggage policy?"));
        assert_eq!(displayed[2].role, Role::Assistant);
        assert!(llm.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_flight_status_with_weather_adds_second_turn() {
        let (state, _) = test_state(MockFlights::found(vec![sample_flight()]));
        let mut conv = Conversation::new();

        let turns = process_utterance(
            &state,
            &mut conv,
            "What's the status of AA1 and the weather where it lands?",
        )
        .await;

        assert_eq!(turns.len(), 2);
        assert!(turns[0].content.starts_with("**Flight Status for AA1:**"));
        assert!(turns[1]
            .content
            .starts_with("**Weather at Los Angeles International:**"));
        assert_eq!(conv.turns().len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_flight_with_weather_reports_missing_destination() {
        let (state, _) = test_state(MockFlights::found(vec![]));
        let mut conv = Conversation::new();

        let turns =
            process_utterance(&state, &mut conv, "is ZZ9 delayed? weather there?").await;

        assert_eq!(turns.len(), 2);
        assert!(turns[0].content.contains("couldn't find any data"));
        assert!(turns[1].content.contains("couldn't determine the destination"));
    }

    #[tokio::test]
    async fn test_generic_chat_sees_full_history() {
        let (state, llm) = test_state(MockFlights::found(vec![]));
        let mut conv = Conversation::new();

        process_utterance(&state, &mut conv, "hello").await;
        let turns = process_utterance(&state, &mut conv, "can you help me book a trip").await;

        assert_eq!(turns, vec![ConversationTurn::assistant("Happy to help with that!")]);
        let calls = llm.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        let (system, messages) = &calls[1];
        assert_eq!(system, conv.system_prompt());
        // greeting, hello, reply, second question
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| m.role != "system"));
        assert_eq!(messages[3].content, "can you help me book a trip");
    }
}
