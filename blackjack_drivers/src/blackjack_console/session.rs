use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use blackjack::{generate_catalog, Catalog, Deck, GameError, Participant, Round, Rule};
use blackjack_drivers::{ChipLedger, ConfigError, ConfigTable, Console};
use rand::rngs::StdRng;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("console failure: {0}")]
    Io(#[from] io::Error),
    #[error("round aborted: {0}")]
    Game(#[from] GameError),
    #[error(transparent)]
    Ledger(#[from] ConfigError),
}

/// Keeps a player and the dealer at one table for as many rounds as the
/// player wants, with a fresh shuffled deck each round.
pub struct Session<R, W> {
    rule: Rule,
    catalog: Catalog,
    rng: StdRng,
    player: Participant,
    dealer: Participant,
    default_bet: u32,
    ledger_path: Option<PathBuf>,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        rule: Rule,
        table: &ConfigTable,
        ledger: Option<ChipLedger>,
        ledger_path: Option<PathBuf>,
        rng: StdRng,
        console: Console<R, W>,
    ) -> Self {
        let (player_chips, dealer_chips) = match ledger {
            Some(ledger) => (ledger.player_chips, ledger.dealer_chips),
            None => (table.player_chips, table.dealer_chips),
        };
        Session {
            rule,
            catalog: generate_catalog(),
            rng,
            player: Participant::player(table.player_name.clone(), player_chips),
            dealer: Participant::dealer(table.dealer_name.clone(), dealer_chips),
            default_bet: table.default_bet,
            ledger_path,
            console,
        }
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let one_more_game = match self.console.ask_yes_no(
                "Hi, are you up for a game of blackjack? If so just say 'yes' otherwise say 'no': ",
            ) {
                Ok(answer) => answer,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => false,
                Err(err) => return Err(err.into()),
            };
            if !one_more_game {
                break;
            }

            self.console.print_label("This is a new game - enjoy it.", '-')?;
            self.play_round()?;
            self.save_ledger()?;
        }

        self.console.print("Thanks for the game(s), see you soon.")?;
        Ok(())
    }

    fn play_round(&mut self) -> Result<(), SessionError> {
        let bet = if self.player.chips > 0 {
            let max = u32::try_from(self.player.chips).unwrap_or(u32::MAX);
            self.console.ask_bet(self.default_bet, max)?
        } else {
            self.console
                .print("You have no chips left, this game is played without a bet.")?;
            0
        };

        let deck = Deck::prepare_with_rng(&self.catalog, &mut self.rng);
        let outcome = Round::new(self.rule, deck, &mut self.player, &mut self.dealer)
            .play(bet, &mut self.console)?;

        self.console.print_label("** GAME RESULTS **", '*')?;
        self.console.print(&self.dealer.hand_status())?;
        self.console.print(&self.player.hand_status())?;
        self.console.print(outcome.message)?;
        self.console.print(&format!(
            "{} has {} chips, {} has {} chips.",
            self.player.name, self.player.chips, self.dealer.name, self.dealer.chips
        ))?;
        self.console.print("")?;
        Ok(())
    }

    fn save_ledger(&self) -> Result<(), ConfigError> {
        match &self.ledger_path {
            Some(path) => self.ledger().save(path),
            None => Ok(()),
        }
    }

    pub fn ledger(&self) -> ChipLedger {
        ChipLedger {
            player_chips: self.player.chips,
            dealer_chips: self.dealer.chips,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.console.into_writer()
    }
}
