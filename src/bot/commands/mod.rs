pub mod reply;
pub mod start;
pub mod support;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Food Order Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Show the menu and start a new order")]
    Start,
    #[command(description = "Contact customer support")]
    Support,
    #[command(description = "Stop the current order")]
    Cancel,
    #[command(description = "Reply to a customer (admin only): /reply <user_id|@username> <message>")]
    Reply(String),
}
