use crate::source::HttpSource;
use crate::utils::js_random_seed;
use std::rc::Rc;
use trivia_core as game;
use trivia_protocol::ApiEndpoint;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::Coord2),
    Restart,
    Assembled(game::SessionToken, game::Result<game::Board>),
    Notify(game::SessionEvent),
}

/// Placeholder shown on cells whose clue is still hidden.
const HIDDEN_LABEL: &str = "?";

const GAME_TITLE: &str = "Jeopardy!";
const LOGO_SRC: &str = "jeopardy-logo.png";

fn loading_view() -> Html {
    html! {
        <div class="spinner">
            <div class="text"><img src={LOGO_SRC} alt={GAME_TITLE}/></div>
            <div class="loader"/>
        </div>
    }
}

fn cell_label(content: game::CellContent<'_>) -> &str {
    content.text().unwrap_or(HIDDEN_LABEL)
}

fn cell_class(showing: game::Showing) -> Classes {
    use game::Showing::*;
    match showing {
        Hidden => classes!("clue"),
        Question => classes!("clue", "question"),
        Answer => classes!("clue", "answered"),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    coords: game::Coord2,
    showing: game::Showing,
    text: AttrValue,
    callback: Callback<game::Coord2>,
}

#[function_component(ClueCell)]
fn clue_cell(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        coords,
        showing,
        text,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("clue {:?} clicked", coords);
        callback.emit(coords);
    });

    html! {
        <td class={cell_class(showing)} {onclick}>
            <span>{text}</span>
        </td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub seed: Option<u64>,
    pub api: AttrValue,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    source: Rc<HttpSource>,
    forced_seed: Option<u64>,
    status: Option<String>,
}

impl GameView {
    fn start_rebuild(&mut self, ctx: &Context<Self>) {
        let token = self.session.begin_rebuild();
        let config = *self.session.config();
        let seed = self.forced_seed.take().unwrap_or_else(js_random_seed);
        let source = Rc::clone(&self.source);

        ctx.link().send_future(async move {
            let result = game::assemble_board(&*source, &config, seed).await;
            Msg::Assembled(token, result)
        });
    }

    fn view_board(&self, ctx: &Context<Self>, board: &game::Board) -> Html {
        let (categories, questions) = board.size();
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <table>
                <thead>
                    <tr>
                        { for board.titles().iter().map(|title| html! { <th>{title.clone()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..questions).map(|clue| html! {
                            <tr>
                                {
                                    for (0..categories).map(|category| {
                                        let coords = (category, clue);
                                        match board.clue_at(coords) {
                                            Ok(entry) => html! {
                                                <ClueCell
                                                    {coords}
                                                    showing={entry.showing()}
                                                    text={AttrValue::from(cell_label(entry.content()).to_string())}
                                                    callback={callback.clone()}
                                                />
                                            },
                                            Err(_) => html! { <td/> },
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut session = game::GameSession::new(game::BoardConfig::default());

        let link = ctx.link().clone();
        session.subscribe(move |event| {
            if matches!(
                event,
                game::SessionEvent::BoardReady { .. } | game::SessionEvent::AssemblyFailed { .. }
            ) {
                link.send_message(Msg::Notify(event.clone()));
            }
        });

        let mut view = Self {
            session,
            source: Rc::new(HttpSource::new(ApiEndpoint::new(props.api.to_string()))),
            forced_seed: props.seed,
            status: None,
        };
        view.start_rebuild(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(coords) => {
                log::debug!("reveal clue: {:?}", coords);
                self.session
                    .reveal(coords)
                    .map_or(false, |reveal| reveal.has_update())
            }
            Restart => {
                log::debug!("restart requested");
                self.start_rebuild(ctx);
                true
            }
            Assembled(token, result) => self.session.publish(token, result).has_update(),
            Notify(game::SessionEvent::AssemblyFailed { error, .. }) => {
                self.status = Some(format!("Could not load a new board: {error}"));
                true
            }
            Notify(game::SessionEvent::BoardReady { .. }) => self.status.take().is_some(),
            Notify(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <div class="trivia">
                if self.session.is_loading() {
                    { loading_view() }
                }
                <h1>{GAME_TITLE}</h1>
                if let Some(status) = &self.status {
                    <p class="error">{status.clone()}</p>
                }
                if let Some(board) = self.session.board() {
                    { self.view_board(ctx, board) }
                }
                <button class="restart" onclick={cb_restart}>{"RESTART"}</button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cells_show_placeholder() {
        assert_eq!(cell_label(game::CellContent::Hidden), "?");
        assert_eq!(cell_label(game::CellContent::Question("2+2")), "2+2");
        assert_eq!(cell_label(game::CellContent::Answer("4")), "4");
    }

    #[test]
    fn spinner_shows_the_game_logo() {
        let expected = html! {
            <div class="spinner">
                <div class="text"><img src="jeopardy-logo.png" alt="Jeopardy!"/></div>
                <div class="loader"/>
            </div>
        };

        assert_eq!(loading_view(), expected);
        assert_eq!(GAME_TITLE, "Jeopardy!");
    }

    #[test]
    fn answered_cells_carry_answered_class() {
        assert_eq!(cell_class(game::Showing::Answer), classes!("clue", "answered"));
        assert_eq!(cell_class(game::Showing::Hidden), classes!("clue"));
    }
}
