//! Stylesheet for the rendered pages.
//!
//! One embedded CSS constant, dark theme with the yellow accent used
//! across the brand. Kept deliberately structural; visual fidelity beyond
//! layout is not a goal.

/// Complete page CSS, inlined into every document head.
pub const APP_CSS: &str = r#"
:root {
  --bg: #07111f;
  --panel: #0f1720;
  --border: #222831;
  --text: #e6eef6;
  --muted: #c9d4da;
  --accent: #ffd658;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

a { color: inherit; text-decoration: none; }

.yellow { color: var(--accent); }

.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 8px 50px;
  background-color: rgba(7, 17, 31, 0.6);
  backdrop-filter: blur(8px);
  transition: all 0.3s ease;
  z-index: 999;
}

.navbar-scrolled { background-color: rgba(7, 17, 31, 0.95); }

.brand { display: flex; align-items: center; gap: 12px; }

.brand-mark {
  width: 36px;
  height: 36px;
  background: var(--accent);
  border-radius: 10px;
  display: flex;
  justify-content: center;
  align-items: center;
  color: #000;
  font-weight: 700;
}

.brand-name { font-size: 1.5rem; font-family: serif; font-weight: 700; margin: 0; }

.nav-links { display: flex; align-items: center; gap: 15px; }

.nav-link {
  display: flex;
  align-items: center;
  gap: 4px;
  font-size: 0.9rem;
  padding: 6px 10px;
  border-radius: 6px;
  transition: all 0.2s;
}

.nav-link:hover { background: rgba(255, 214, 88, 0.3); color: var(--accent); }

.explore-btn {
  padding: 0.6em 2em;
  font-size: 1rem;
  border-radius: 8px;
  background: var(--accent);
  color: #000;
  font-weight: 600;
  border: none;
}

.page-main { min-height: 100vh; padding-top: 60px; }

.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding: 0 20px;
  background: radial-gradient(circle at top, #13253d, var(--bg));
}

.hero-title { font-size: 3rem; font-weight: 700; margin-bottom: 30px; }

.hero-lead { font-size: 1.1rem; max-width: 600px; margin: 0 auto 50px; }

.hero-search {
  display: flex;
  justify-content: center;
  gap: 10px;
  flex-wrap: wrap;
  margin-bottom: 60px;
}

.hero-input {
  padding: 10px;
  border-radius: 8px;
  border: none;
  background: rgba(255, 255, 255, 0.9);
  color: #000;
  min-width: 250px;
  font-size: 1rem;
}

.hero-btn {
  padding: 10px 20px;
  border-radius: 8px;
  border: none;
  background: var(--accent);
  color: #000;
  font-weight: 600;
  cursor: pointer;
}

.hero-stats { display: flex; justify-content: center; gap: 20px; flex-wrap: wrap; }

.stat-card {
  background: rgba(255, 255, 255, 0.9);
  color: #000;
  padding: 20px;
  min-width: 140px;
  border-radius: 10px;
  text-align: center;
}

.stat-value { font-size: 1.5rem; margin: 0 0 5px; }

.features {
  background: rgba(7, 17, 31, 0.8);
  text-align: center;
  padding: 4rem 2rem;
}

.features-kicker { font-weight: 300; font-size: 1.3rem; letter-spacing: 1px; color: var(--accent); }

.tech-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
  padding: 2rem;
}

.tech-card {
  flex: 1 1 250px;
  max-width: 320px;
  background: rgba(0, 0, 0, 0.3);
  padding: 1.5rem;
  border-radius: 14px;
  text-align: center;
}

.explorer-container { max-width: 1100px; margin: 0 auto; padding: 40px 20px; }

.explorer-title { font-size: 2.4rem; }

.explorer-subtitle { color: var(--muted); }

.filter-card {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 16px;
  margin-bottom: 20px;
}

.search-row { display: flex; gap: 10px; margin-bottom: 12px; }

.filters-row { display: flex; gap: 10px; flex-wrap: wrap; margin-bottom: 12px; }

.input {
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text);
  padding: 10px;
  flex: 1;
}

.search-btn {
  padding: 10px 20px;
  border-radius: 8px;
  border: none;
  background: var(--accent);
  color: #000;
  font-weight: 600;
  cursor: pointer;
}

.active-filters { display: flex; gap: 8px; color: var(--muted); font-size: 0.9rem; }

.results-count { font-weight: 600; }

.results-list {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 16px;
}

.crime-card {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 8px;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.4);
}

.crime-card-head { display: flex; justify-content: space-between; align-items: center; }

.crime-card-title { font-size: 18px; font-weight: 600; }

.badge {
  border-radius: 8px;
  padding: 4px 10px;
  font-weight: 700;
  font-size: 12px;
}

.crime-card-desc { font-size: 14px; color: var(--muted); }

.crime-card-row { display: flex; gap: 16px; flex-wrap: wrap; }

.crime-card-item { font-size: 13px; color: var(--muted); }

.crime-card-label { font-weight: 600; margin-right: 4px; color: var(--text); }

.analytics-container { padding: 20px; }

.analytics-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 16px;
}

.analytics-grid img { width: 100%; height: auto; border-radius: 8px; }

.footer { background: var(--panel); border-top: 1px solid var(--border); padding: 2rem; }

.footer-container { display: flex; flex-wrap: wrap; gap: 2rem; justify-content: space-between; }

.footer-block { flex: 1 1 240px; }

.footer-list { list-style: none; padding: 0; }

.footer-link { color: var(--muted); }

.footer-link:hover { color: var(--accent); }

.footer-bottom { margin-top: 2rem; color: var(--muted); font-size: 0.85rem; }
"#;
