use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use crate::channel::{Channel, ChannelTerms};
use crate::cli::ChannelsArgs;
use crate::util::write_json_stdout;

#[derive(Debug, Serialize)]
struct ChannelEntry {
    channel: Channel,
    #[serde(flatten)]
    terms: ChannelTerms,
}

pub fn run(args: ChannelsArgs) -> Result<()> {
    let entries = Channel::ALL
        .iter()
        .map(|channel| ChannelEntry {
            channel: *channel,
            terms: channel.terms(),
        })
        .collect::<Vec<_>>();

    if args.json {
        return write_json_stdout(&entries);
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_channel_table(&mut output, &entries)?;
    output.flush()?;
    Ok(())
}

fn write_channel_table<W: Write>(output: &mut W, entries: &[ChannelEntry]) -> Result<()> {
    for entry in entries {
        writeln!(
            output,
            "{}\t{}\t{}\t{}",
            entry.channel.as_str(),
            entry.terms.trials_label,
            entry.terms.successes_label,
            entry.terms.rate_label
        )?;
    }
    Ok(())
}
