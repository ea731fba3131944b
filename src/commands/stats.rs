use super::{print_json, tracker};
use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    user_id: i64,

    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let tracker = tracker()?;
    let stats = tracker.user_statistics(args.user_id)?;

    if args.json {
        return print_json(&stats);
    }
    let user = tracker.get_user(args.user_id)?;
    msg_print!(Message::StatisticsTitle(user.nickname), true);
    View::statistics(&stats, tracker.unit())
}
