//! Application constants
//!
//! Single source of truth for endpoint paths and fixed user-facing text.

/// Greeting endpoint
pub const INITIAL_MESSAGE_PATH: &str = "/api/initial-message";

/// Send-message endpoint
pub const CHAT_PATH: &str = "/api/chat";

/// History endpoint prefix, followed by the conversation id
pub const MESSAGES_PATH: &str = "/api/messages";

/// Dialect list endpoint
pub const DIALECTS_PATH: &str = "/api/dialects";

/// Dialect selection endpoint
pub const DIALECT_PATH: &str = "/api/dialect";

/// Conversation list endpoint
pub const CHATS_PATH: &str = "/api/chats";

/// Shown when the greeting cannot be loaded.
pub const FALLBACK_GREETING: &str = "أهلاً! أنا وكيل العقارات الذكي. كيف يمكنني مساعدتك؟";

/// Shown when the service reports a failure for a sent message.
pub const PROCESSING_ERROR: &str = "عذراً، حدث خطأ في معالجة طلبك. يرجى المحاولة مرة أخرى.";

/// Shown when a sent message never reached the service.
pub const CONNECTION_ERROR: &str = "عذراً، حدث خطأ في الاتصال. يرجى التحقق من اتصالك بالإنترنت.";

/// Default transcript header
pub const DEFAULT_DATE_HEADER: &str = "اليوم";

/// Header title used before any conversation is selected
pub const DEFAULT_TITLE: &str = "وكيل العقارات";
