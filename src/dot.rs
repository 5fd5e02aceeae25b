// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Graphviz export and a plain-text dump of automata.
//!
//! ```text
//! levdict dot badger -k 1 | dot -Tsvg > badger.svg
//! ```
//!
//! Accepting states are drawn as `doublecircle`. Wildcard edges are labelled
//! `*`, epsilon edges `ε`. A DFA default transition is a dashed `*` edge.

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

use crate::alphabet::{Input, Symbol};
use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::state::NfaState;

const HEADER: &str = "digraph automaton {\n    \
    graph [rankdir=LR, fontsize=14];\n    \
    node [fontname=\"Arial\", shape=circle, style=filled, color=lightgray];\n    \
    edge [fontname=\"Arial\"];\n";

/// Quote-safe label text.
fn escape(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => {
                let _ = write!(out, "\\\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

struct Label<'a, S>(&'a Input<S>);

impl<S: Display> Display for Label<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Input::Epsilon => f.write_str("ε"),
            Input::Any => f.write_str("*"),
            Input::Symbol(s) => f.write_str(&escape(&s.to_string())),
        }
    }
}

fn nfa_node(state: &NfaState) -> String {
    format!("n{}_{}", state.position, state.errors)
}

fn shape(accepting: bool) -> &'static str {
    if accepting {
        "doublecircle"
    } else {
        "circle"
    }
}

/// Write `nfa` as a Graphviz digraph.
pub fn write_nfa_dot<S, W>(nfa: &Nfa<S>, out: &mut W) -> io::Result<()>
where
    S: Symbol + Display,
    W: Write,
{
    out.write_all(HEADER.as_bytes())?;
    writeln!(out, "    start [shape=point];")?;

    for state in nfa.states() {
        writeln!(
            out,
            "    {} [label=\"{}\", shape={}];",
            nfa_node(&state),
            state,
            shape(nfa.is_final(&state))
        )?;
    }
    for state in nfa.start_states() {
        writeln!(out, "    start -> {};", nfa_node(state))?;
    }
    for (src, input, dst) in nfa.edges() {
        writeln!(
            out,
            "    {} -> {} [label=\"{}\"];",
            nfa_node(&src),
            nfa_node(&dst),
            Label(&input)
        )?;
    }
    writeln!(out, "}}")
}

/// Write `dfa` as a Graphviz digraph. Node labels list the NFA states each
/// DFA state stands for.
pub fn write_dfa_dot<S, W>(dfa: &Dfa<S>, out: &mut W) -> io::Result<()>
where
    S: Symbol + Display,
    W: Write,
{
    out.write_all(HEADER.as_bytes())?;
    writeln!(out, "    start [shape=point];")?;
    writeln!(out, "    start -> d{};", dfa.start())?;

    for id in 0..dfa.state_count() {
        writeln!(
            out,
            "    d{} [label=\"{}\\n{}\", shape={}];",
            id,
            id,
            dfa.members(id),
            shape(dfa.is_accepting(id))
        )?;
        for (symbol, dst) in dfa.transitions(id) {
            writeln!(
                out,
                "    d{} -> d{} [label=\"{}\"];",
                id,
                dst,
                Label(&Input::Symbol(*symbol))
            )?;
        }
        if let Some(dst) = dfa.default_transition(id) {
            writeln!(out, "    d{} -> d{} [label=\"*\", style=dashed];", id, dst)?;
        }
    }
    writeln!(out, "}}")
}

/// Plain-text transition table, one block per state.
///
/// ```text
/// 0 [(0,0)(0,1)(1,1)]
///   b -> 1
///   * -> 2
/// ```
pub fn describe_dfa<S: Symbol + Display>(dfa: &Dfa<S>) -> String {
    let mut out = String::new();
    for id in 0..dfa.state_count() {
        let start = if id == dfa.start() { " start" } else { "" };
        let accept = if dfa.is_accepting(id) { " accept" } else { "" };
        let _ = writeln!(out, "{} {}{}{}", id, dfa.members(id), start, accept);
        for (symbol, dst) in dfa.transitions(id) {
            let _ = writeln!(out, "  {} -> {}", symbol, dst);
        }
        if let Some(dst) = dfa.default_transition(id) {
            let _ = writeln!(out, "  * -> {}", dst);
        }
    }
    out
}
