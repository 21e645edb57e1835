// ============================================================================
// BRACKET VIEW - Primera ronda de una categoría
// ============================================================================

use serde_json::Value;
use yew::prelude::*;

use crate::models::{BracketLayout, CompetitorRow, MatchCard};

#[derive(Properties, PartialEq)]
pub struct BracketViewProps {
    /// Estructura de la categoría (`{rodada_1: [...]}`), si existe
    pub chaves: Option<Value>,
}

#[function_component(BracketView)]
pub fn bracket_view(props: &BracketViewProps) -> Html {
    let layout = BracketLayout::from_chaves(props.chaves.as_ref());

    let BracketLayout::FirstRound(cards) = layout else {
        return html! {
            <div class="bracket-empty">
                <p>{"As chaves ainda não foram geradas para esta categoria."}</p>
            </div>
        };
    };

    html! {
        <div class="bracket">
            <div class="bracket-round">
                <h4 class="bracket-round-title">{"Oitavas / Quartas"}</h4>
                { for cards.iter().map(match_card) }
            </div>
            <div class="bracket-next">
                <div class="bracket-next-placeholder">
                    <span>{"›"}</span>
                    <span class="bracket-next-label">{"Aguardando"}<br/>{"Vencedores"}</span>
                </div>
            </div>
        </div>
    }
}

fn match_card(card: &MatchCard) -> Html {
    let class = if card.finished {
        "bracket-match bracket-match-finished"
    } else {
        "bracket-match"
    };
    let [a, b] = &card.rows;
    html! {
        <div class="bracket-slot">
            <div {class}>
                { competitor_row(a) }
                <div class="bracket-divider"></div>
                { competitor_row(b) }
            </div>
            <div class="bracket-connector"></div>
        </div>
    }
}

fn competitor_row(row: &CompetitorRow) -> Html {
    let class = classes!(
        "bracket-competitor",
        row.is_winner.then_some("bracket-winner"),
        row.is_bye.then_some("bracket-bye"),
    );
    html! {
        <div {class}>
            <span class="bracket-name">{ row.nome.clone() }</span>
            if row.is_winner {
                <span class="bracket-trophy">{"🏆"}</span>
            }
        </div>
    }
}
