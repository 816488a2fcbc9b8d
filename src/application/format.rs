//! Message texts sent to LINE users.

use crate::domain::time::format_timestamp;
use crate::domain::{ButtonsTemplate, IndexReading, MessageAction, OutboundMessage};

use super::alert::ChangeAlert;

/// Reply when the index provider could not be reached.
pub const APOLOGY: &str = "抱歉，無法獲取指數資訊，請稍後再試。";

/// Reply to anything that is not a known command.
pub const GREETING: &str = "您好！我是加密貨幣恐懼貪婪指數機器人\n\
    輸入「指數」查看最新數據\n\
    輸入「說明」查看使用說明";

/// Reply to the index command.
pub fn reading_message(reading: &IndexReading) -> OutboundMessage {
    OutboundMessage::text(format!(
        "加密貨幣恐懼貪婪指數\n\
        數值: {}\n\
        狀態: {}\n\
        時間: {}",
        reading.value(),
        reading.classification(),
        format_timestamp(reading.observed_at())
    ))
}

/// Scheduled daily push.
pub fn daily_message(reading: &IndexReading) -> OutboundMessage {
    OutboundMessage::text(format!(
        "📊 每日恐懼貪婪指數報告\n\
        \n\
        數值: {}\n\
        狀態: {}\n\
        時間: {}",
        reading.value(),
        reading.classification(),
        format_timestamp(reading.observed_at())
    ))
}

/// Push sent when the index swings sharply.
pub fn alert_message(alert: &ChangeAlert) -> OutboundMessage {
    OutboundMessage::text(format!(
        "⚠️ 恐懼貪婪指數劇烈變動\n\
        \n\
        目前數值: {}\n\
        先前數值: {}\n\
        變動幅度: {}\n\
        狀態: {}\n\
        時間: {}",
        alert.current,
        alert.previous,
        alert.delta_display(),
        alert.classification,
        format_timestamp(alert.observed_at)
    ))
}

/// Buttons card listing the two commands.
pub fn help_message() -> OutboundMessage {
    OutboundMessage::Buttons(ButtonsTemplate {
        alt_text: "功能說明".to_string(),
        title: "加密貨幣恐懼貪婪指數機器人".to_string(),
        text: "您可以使用以下功能：".to_string(),
        actions: vec![
            MessageAction {
                label: "查看現在指數".to_string(),
                text: "指數".to_string(),
            },
            MessageAction {
                label: "顯示說明".to_string(),
                text: "說明".to_string(),
            },
        ],
    })
}
