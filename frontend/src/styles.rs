//! Page stylesheet, injected once by `App`.

pub const GLOBAL: &str = r#"
:root {
    --bg: #0b1016;
    --bg-card: #111922;
    --border: rgba(255, 255, 255, 0.06);
    --border-accent: rgba(255, 255, 255, 0.12);
    --text: #e6edf3;
    --text-muted: #8b98a5;
    --accent-green: #34d399;
    --accent-cyan: #22d3ee;
    --accent-blue: #3b8beb;
    --accent-amber: #fbbf24;
    --accent-red: #f87171;
    --fluidra-color: #34d399;
    --pentair-color: #3b8beb;
    --xylem-color: #fbbf24;
    --font-display: "DM Serif Display", Georgia, serif;
    --font-body: "DM Sans", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    --font-mono: "JetBrains Mono", ui-monospace, monospace;
}

* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { background: var(--bg); color: var(--text); font-family: var(--font-body); line-height: 1.5; }

.header { border-bottom: 1px solid var(--border); }
.header-inner { max-width: 1200px; margin: 0 auto; padding: 16px 24px; display: flex; justify-content: space-between; gap: 16px; flex-wrap: wrap; }
.header-brand { display: flex; align-items: center; gap: 12px; }
.header-badge { font-family: var(--font-mono); font-size: 0.65rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--accent-cyan); border: 1px solid var(--accent-cyan); padding: 2px 8px; border-radius: 4px; }
.header-title { font-size: 0.85rem; color: var(--text-muted); }
.header-meta { display: flex; gap: 20px; font-family: var(--font-mono); font-size: 0.65rem; letter-spacing: 0.1em; color: var(--text-muted); }
.pulse-dot { display: inline-block; width: 6px; height: 6px; border-radius: 50%; background: var(--accent-green); animation: pulse 2s infinite; }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.3; } }

.nav-bar { position: sticky; top: 0; z-index: 10; background: rgba(11, 16, 22, 0.9); backdrop-filter: blur(12px); border-bottom: 1px solid var(--border); }
.nav-inner { max-width: 1200px; margin: 0 auto; padding: 10px 24px; display: flex; gap: 8px; overflow-x: auto; }
.nav-pill { white-space: nowrap; font-size: 0.75rem; color: var(--text-muted); text-decoration: none; padding: 6px 12px; border-radius: 999px; border: 1px solid transparent; transition: all 0.2s ease; }
.nav-pill:hover { color: var(--text); }
.nav-pill.active { color: var(--accent-cyan); border-color: var(--accent-cyan); background: rgba(34, 211, 238, 0.08); }

.main { max-width: 1200px; margin: 0 auto; padding: 0 24px 80px; }
section { padding-top: 80px; scroll-margin-top: 60px; }

.animate-in { opacity: 0; transform: translateY(24px); transition: opacity 0.7s ease, transform 0.7s ease; }
.animate-in.visible { opacity: 1; transform: none; }

.hero { padding: 96px 0 48px; scroll-margin-top: 60px; }
.hero-eyebrow { font-family: var(--font-mono); font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; color: var(--accent-cyan); margin-bottom: 16px; }
.hero h1 { font-family: var(--font-display); font-weight: 400; font-size: clamp(2.2rem, 5vw, 3.6rem); line-height: 1.1; margin-bottom: 24px; }
.hero-sub { max-width: 760px; color: var(--text-muted); font-size: 1.05rem; }
.hero-sub strong { color: var(--text); }

.verdict-strip { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px; }
.verdict-card { background: var(--bg-card); border: 1px solid var(--border); border-radius: 12px; padding: 20px; position: relative; overflow: hidden; }
.verdict-rank { font-family: var(--font-mono); font-size: 0.65rem; letter-spacing: 0.12em; text-transform: uppercase; color: var(--text-muted); }
.verdict-company { font-family: var(--font-display); font-size: 1.5rem; margin-top: 8px; }
.verdict-score { font-size: 2.2rem; font-weight: 700; }
.verdict-score-denom { font-size: 1rem; color: var(--text-muted); }
.verdict-label { font-size: 0.85rem; color: var(--text-muted); margin-bottom: 16px; }
.verdict-bar { position: absolute; left: 0; bottom: 0; height: 3px; transition: width 1.2s cubic-bezier(0.22, 1, 0.36, 1); }

.section-header { display: flex; align-items: baseline; gap: 16px; margin-bottom: 24px; }
.section-number { font-family: var(--font-mono); font-size: 0.75rem; color: var(--accent-cyan); }
.section-title { font-family: var(--font-display); font-weight: 400; font-size: 1.8rem; }

.card { background: var(--bg-card); border: 1px solid var(--border); border-radius: 12px; padding: 20px; }
.card-label { font-family: var(--font-mono); font-size: 0.65rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--text-muted); margin-bottom: 6px; }
.card-value { font-size: 1.6rem; font-weight: 700; }
.card-note { font-size: 0.85rem; color: var(--text-muted); }
.card-note strong { color: var(--accent-green); }
.grid-2, .grid-3, .grid-4 { display: grid; gap: 16px; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(340px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }

.fin-table { width: 100%; border-collapse: collapse; font-size: 0.85rem; }
.fin-table th { text-align: left; font-family: var(--font-mono); font-size: 0.6rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--text-muted); padding: 10px 12px; border-bottom: 1px solid var(--border-accent); }
.fin-table td { padding: 12px; border-bottom: 1px solid var(--border); color: var(--text-muted); }
.fin-table td.val { color: var(--text); font-family: var(--font-mono); white-space: nowrap; }

.gap-row { display: grid; grid-template-columns: 1.2fr 0.6fr 2fr; gap: 16px; align-items: center; padding: 14px 20px; border-bottom: 1px solid var(--border); }
.gap-head { background: rgba(255, 255, 255, 0.02); border-bottom: 1px solid var(--border-accent); font-family: var(--font-mono); font-size: 0.6rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--text-muted); }
.gap-name { font-weight: 600; }
.gap-note { font-size: 0.85rem; color: var(--text-muted); }
.severity { font-family: var(--font-mono); font-size: 0.6rem; letter-spacing: 0.1em; text-transform: uppercase; padding: 3px 8px; border-radius: 4px; }
.severity.whitespace { color: var(--accent-green); background: rgba(52, 211, 153, 0.1); }
.severity.critical { color: var(--accent-red); background: rgba(248, 113, 113, 0.1); }
.severity.high { color: var(--accent-amber); background: rgba(251, 191, 36, 0.1); }

.esg-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; }
.esg-badge { background: var(--bg-card); border: 1px solid var(--border); border-radius: 12px; padding: 20px; text-align: center; }
.esg-icon { font-size: 1.6rem; }

.signal-row { display: grid; grid-template-columns: 1.4fr 2fr 0.6fr; gap: 16px; align-items: center; padding: 10px 0; }
.signal-label { font-size: 0.85rem; }
.signal-bar-track { height: 8px; border-radius: 4px; background: rgba(255, 255, 255, 0.05); overflow: hidden; }
.signal-bar-fill { height: 100%; border-radius: 4px; transition: width 1.2s cubic-bezier(0.22, 1, 0.36, 1); }
.signal-rating { font-family: var(--font-mono); font-size: 0.7rem; text-align: right; }

.risk-banner { border: 1px solid rgba(248, 113, 113, 0.3); background: rgba(248, 113, 113, 0.05); border-radius: 12px; padding: 28px; }
.risk-banner h3 { font-family: var(--font-display); font-weight: 400; font-size: 1.4rem; margin-bottom: 12px; }
.risk-banner p { color: var(--text-muted); }
.risk-signals { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 20px; }
.risk-signal { font-size: 0.75rem; padding: 6px 12px; border-radius: 999px; border: 1px solid rgba(248, 113, 113, 0.3); color: var(--accent-red); }

.comp-card { background: var(--bg-card); border: 1px solid var(--border); border-radius: 12px; padding: 24px; position: relative; overflow: hidden; }
.accent-line { position: absolute; top: 0; left: 0; right: 0; height: 3px; }
.comp-score-ring { position: relative; width: 72px; height: 72px; display: flex; align-items: center; justify-content: center; font-size: 1.4rem; font-weight: 700; margin-bottom: 16px; }
.comp-card h3 { font-family: var(--font-display); font-weight: 400; font-size: 1.4rem; }
.comp-desc { font-size: 0.8rem; color: var(--text-muted); margin: 4px 0 12px; }
.comp-tag { display: inline-block; font-size: 0.65rem; padding: 3px 8px; border-radius: 4px; margin: 0 6px 6px 0; }
.comp-detail { font-size: 0.85rem; color: var(--text-muted); margin-top: 12px; }

.pathway-heading { font-family: var(--font-display); font-weight: 400; font-size: 1.15rem; margin-bottom: 16px; }
.pathway-list { display: flex; flex-direction: column; gap: 12px; }
.pathway-card { display: flex; gap: 20px; background: var(--bg-card); border: 1px solid var(--border); border-radius: 12px; padding: 20px; }
.pathway-num { font-family: var(--font-mono); font-size: 1.2rem; color: var(--accent-cyan); min-width: 36px; }
.pathway-card h4 { margin-bottom: 6px; }
.pathway-card p { font-size: 0.85rem; color: var(--text-muted); }

.timeline { border-left: 1px solid var(--border-accent); padding-left: 24px; display: flex; flex-direction: column; gap: 24px; }
.tl-item { position: relative; }
.tl-item::before { content: ""; position: absolute; left: -29px; top: 6px; width: 9px; height: 9px; border-radius: 50%; background: var(--accent-cyan); }
.tl-date { font-family: var(--font-mono); font-size: 0.65rem; letter-spacing: 0.12em; color: var(--accent-cyan); }
.tl-title { font-weight: 600; margin: 2px 0 4px; }
.tl-desc { font-size: 0.85rem; color: var(--text-muted); }

.footer { max-width: 1200px; margin: 0 auto; padding: 32px 24px; border-top: 1px solid var(--border); display: flex; justify-content: space-between; gap: 16px; flex-wrap: wrap; font-size: 0.7rem; color: var(--text-muted); }

@media (max-width: 720px) {
    .gap-row, .signal-row { grid-template-columns: 1fr; }
    .header-meta { display: none; }
}
"#;
