use crate::theme::Theme;
use crate::utils::*;
use espejito_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Pause between a completed level and the board of the next one.
const ADVANCE_DELAY_MS: u32 = 300;

/// Core session plus the seeded rule source feeding it.
#[derive(Debug)]
struct GameSession {
    session: game::PuzzleSession,
    generator: game::RandomMysteryGenerator,
}

impl GameSession {
    fn new(seed: u64) -> Self {
        let mut generator = game::RandomMysteryGenerator::new(seed);
        let mut session = game::PuzzleSession::new();
        session.start_level(&mut generator);
        Self { session, generator }
    }

    fn advance_level(&mut self) {
        self.session.start_level(&mut self.generator);
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Notice {
    LevelComplete { finished: game::Level, next: game::Level },
    GameComplete,
    OutOfClicks,
}

impl Notice {
    fn message(self) -> String {
        match self {
            Self::LevelComplete { finished, next } => {
                format!("Level {} complete! Moving to Level {}.", finished, next)
            }
            Self::GameComplete => "Congratulations! You completed all levels!".to_string(),
            Self::OutOfClicks => format!("Game Over! You reached {} clicks.", game::MAX_CLICKS),
        }
    }

    /// Dismissing these returns the player to the instructions screen.
    const fn ends_session(self) -> bool {
        matches!(self, Self::GameComplete | Self::OutOfClicks)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Begin,
    Clicked(game::Cell),
    AdvanceLevel,
    DismissNotice,
    CycleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::Cell,
    state: game::CellState,
    callback: Callback<game::Cell>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        state,
        callback,
    } = props.clone();

    let class = classes!("cell", state.is_on().then_some("on"));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}/>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force the mystery-rule seed instead of drawing one per game
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: Option<GameSession>,
    notice: Option<Notice>,
    theme: Option<Theme>,
    forced_seed: Option<u64>,
    _pending_advance: Option<Timeout>,
}

impl GameView {
    fn new_seed(&self) -> u64 {
        self.forced_seed.unwrap_or_else(js_random_seed)
    }

    fn handle_click(&mut self, ctx: &Context<Self>, index: game::Cell) -> bool {
        if self.notice.is_some() {
            return false;
        }
        let Some(game) = &mut self.game else {
            return false;
        };

        let report = match game.session.apply_click(index) {
            Ok(report) => report,
            Err(err) => {
                log::error!("click on {} rejected: {}", index, err);
                return false;
            }
        };
        log::debug!(
            "click {} changed {:?} ({:?})",
            report.clicks,
            report.changed,
            report.outcome
        );

        match report.outcome {
            game::ClickOutcome::Continue => {}
            game::ClickOutcome::LevelComplete => {
                let next = game.session.level();
                self.notice = Some(Notice::LevelComplete {
                    finished: next - 1,
                    next,
                });
                let link = ctx.link().clone();
                self._pending_advance = Some(Timeout::new(ADVANCE_DELAY_MS, move || {
                    link.send_message(Msg::AdvanceLevel)
                }));
            }
            game::ClickOutcome::GameComplete => self.notice = Some(Notice::GameComplete),
            game::ClickOutcome::ClickLimitExceeded => self.notice = Some(Notice::OutOfClicks),
        }

        true
    }

    fn view_instructions(&self, on_begin: Callback<MouseEvent>) -> Html {
        html! {
            <article class="instructions">
                <h2>{"Espejito"}</h2>
                <p>{"Click a square to flip it together with its mirror across the center of the board."}</p>
                <p>{"Each level hides one more mystery square that flips a third square of its own."}</p>
                <p>{format!(
                    "Turn all {} squares on to clear a level. The game ends after {} clicks.",
                    game::CELL_COUNT,
                    game::MAX_CLICKS,
                )}</p>
                <button onclick={on_begin}>{"Begin"}</button>
            </article>
        }
    }

    fn view_board(&self, ctx: &Context<Self>, game_session: &GameSession) -> Html {
        let callback = ctx.link().callback(Msg::Clicked);

        html! {
            <>
                <nav>
                    <aside>{format!("Level: {}", game_session.session.level())}</aside>
                    <aside>{format!("Clicks: {}", game_session.session.clicks())}</aside>
                </nav>
                <table class="board">
                    {
                        for (0..game::GRID_DIM).map(|row| html! {
                            <tr>
                                {
                                    for (0..game::GRID_DIM).map(|col| {
                                        let index = game::to_index((row, col));
                                        let state = game_session.session.cell_at(index);
                                        let callback = callback.clone();
                                        html! {
                                            <CellView {index} {state} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </>
        }
    }

    fn view_notice(&self, ctx: &Context<Self>) -> Html {
        let Some(notice) = self.notice else {
            return Html::default();
        };
        let cb_dismiss = ctx.link().callback(|_| Msg::DismissNotice);

        html! {
            <Modal>
                <dialog open={true}>
                    <article>
                        <p>{notice.message()}</p>
                        <footer>
                            <button onclick={cb_dismiss}>{"OK"}</button>
                        </footer>
                    </article>
                </dialog>
            </Modal>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: None,
            notice: None,
            theme: LocalOrDefault::local_or_default(),
            forced_seed: ctx.props().seed,
            _pending_advance: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Begin => {
                let seed = self.new_seed();
                log::debug!("new game with seed {}", seed);
                self.game = Some(GameSession::new(seed));
                self.notice = None;
                true
            }
            Clicked(index) => self.handle_click(ctx, index),
            AdvanceLevel => {
                self._pending_advance = None;
                match &mut self.game {
                    Some(game) => {
                        game.advance_level();
                        true
                    }
                    None => false,
                }
            }
            DismissNotice => match self.notice.take() {
                Some(notice) if notice.ends_session() => {
                    self.game = None;
                    true
                }
                Some(_) => true,
                None => false,
            },
            CycleTheme => {
                self.theme = Theme::cycle(self.theme);
                Theme::apply(self.theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_begin = ctx.link().callback(|_| Msg::Begin);
        let cb_theme = ctx.link().callback(|_| Msg::CycleTheme);

        let body = match &self.game {
            None => self.view_instructions(cb_begin),
            Some(game_session) => self.view_board(ctx, game_session),
        };

        html! {
            <div class="espejito">
                <small onclick={cb_theme}>{"◐"}</small>
                { body }
                { self.view_notice(ctx) }
            </div>
        }
    }
}
