use serde::{Deserialize, Serialize};

//conversation_core
#[derive(Debug, Deserialize, Serialize)]
pub struct ConversationCore {
    pub uuid: String,
    pub last_message_at: i64,
    pub last_message_id: Option<String>,
    pub created_at: i64,
}

//conversation_participant
#[derive(Debug, Deserialize, Serialize)]
pub struct ConversationParticipant {
    pub conversation_id: String,
    pub user_id: String,
    pub joined_at: i64,
    pub last_read_message_id: Option<String>,
}

//message_core
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessageCore {
    pub uuid: String,
    pub conversation_id: String,
    pub owner: String,
    pub text: String,
    pub created_at: i64,
}
