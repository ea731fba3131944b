use super::{print_json, tracker};
use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Show only the rule with this name
    #[arg(short, long)]
    name: Option<String>,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct TypesArgs {
    #[arg(long)]
    json: bool,
}

pub fn rules_cmd(args: RulesArgs) -> Result<()> {
    let tracker = tracker()?;
    let rules = match args.name {
        Some(name) => vec![tracker.find_rule(&name)?],
        None => tracker.list_rules()?,
    };

    if args.json {
        return print_json(&rules);
    }
    msg_print!(Message::RulesTitle, true);
    View::rules(&rules)
}

pub fn types_cmd(args: TypesArgs) -> Result<()> {
    let types = tracker()?.list_types()?;

    if args.json {
        return print_json(&types);
    }
    msg_print!(Message::TypesTitle, true);
    View::types(&types)
}
