//! Global CSS styles for Fleetsite.
//!
//! Class names here are the DOM contract from `fleetsite_core::ClassNames`
//! defaults; a config overriding them needs a matching stylesheet.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT SKY (Backgrounds) */
  --night: #0b1320;
  --night-lighter: #121d2f;
  --night-border: #1f2c44;

  /* ACCENT */
  --horizon: #3a86ff;
  --horizon-glow: rgba(58, 134, 255, 0.35);
  --brass: #e0b65a;

  /* TEXT */
  --text-primary: #f4f6fb;
  --text-secondary: rgba(244, 246, 251, 0.72);
  --text-muted: rgba(244, 246, 251, 0.5);

  /* SEMANTIC */
  --danger: #ff4d6d;
  --success: #2ec4b6;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;
  --font-display: 'Playfair Display', Georgia, serif;

  /* Layout */
  --header-height: 72px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 700ms cubic-bezier(0.2, 0.7, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Root (scroll container) === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.page.scroll-locked {
  overflow: hidden;
}

.container {
  max-width: 1160px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

section {
  padding: 6rem 0;
  scroll-margin-top: var(--header-height);
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.25rem;
  color: var(--brass);
  margin-bottom: 2.5rem;
  text-align: center;
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  z-index: 100;
  background: rgba(11, 19, 32, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--night-border);
  transition: transform var(--transition-normal);
}

.header.scroll-down {
  transform: translateY(-100%);
}

.header.scroll-up {
  transform: translateY(0);
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.35);
}

.header-inner {
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-family: var(--font-display);
  font-size: 1.5rem;
  color: var(--brass);
  letter-spacing: 0.05em;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-links a {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-links a:hover {
  color: var(--horizon);
}

/* === Burger === */
.burger-button {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 0.5rem;
}

.burger-line {
  width: 26px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-fast);
}

.burger-button.active .burger-line:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.burger-button.active .burger-line:nth-child(2) {
  opacity: 0;
}

.burger-button.active .burger-line:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

@media (max-width: 768px) {
  .burger-button {
    display: flex;
  }

  .nav-links {
    position: fixed;
    top: var(--header-height);
    right: 0;
    width: 70%;
    height: calc(100vh - var(--header-height));
    flex-direction: column;
    padding: 2rem;
    background: var(--night-lighter);
    transform: translateX(100%);
    transition: transform var(--transition-normal);
  }

  .nav-links.active {
    transform: translateX(0);
  }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  background: radial-gradient(ellipse at top, #1d3157 0%, var(--night) 70%);
}

.hero-title {
  font-family: var(--font-display);
  font-size: 3.5rem;
  line-height: 1.15;
  margin-bottom: 1.5rem;
}

.hero-subtitle {
  max-width: 560px;
  color: var(--text-secondary);
  font-size: 1.2rem;
  margin-bottom: 2.5rem;
}

.cta-button {
  display: inline-block;
  padding: 0.9rem 2.2rem;
  border-radius: 999px;
  background: var(--horizon);
  color: #fff;
  box-shadow: 0 0 24px var(--horizon-glow);
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}

.service-card,
.fleet-card,
.stat-item {
  opacity: 0;
  transform: translateY(32px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.service-card.animate,
.fleet-card.animate,
.stat-item.animate {
  opacity: 1;
  transform: translateY(0);
}

.service-card,
.fleet-card {
  padding: 2rem;
  border: 1px solid var(--night-border);
  border-radius: 16px;
  background: var(--night-lighter);
}

.card-title {
  font-size: 1.25rem;
  margin-bottom: 0.75rem;
}

.card-text {
  color: var(--text-secondary);
}

.fleet-specs {
  list-style: none;
  margin-top: 1rem;
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* === Stats === */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 2rem;
  text-align: center;
}

.stat-number {
  font-family: var(--font-display);
  font-size: 2.75rem;
  color: var(--brass);
}

.stat-label {
  color: var(--text-secondary);
}

/* === Contact Form === */
.contact-form {
  max-width: 640px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-label {
  display: block;
  margin-bottom: 0.4rem;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.form-input {
  width: 100%;
  padding: 0.85rem 1rem;
  border: 1px solid var(--night-border);
  border-radius: 10px;
  background: transparent;
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast);
}

.form-input:focus {
  outline: none;
  border-color: var(--horizon);
}

.form-input.error {
  border-color: var(--danger);
}

.form-textarea {
  resize: vertical;
}

.error-message {
  display: none;
  margin-top: 0.35rem;
  color: var(--danger);
  font-size: 0.85rem;
}

.submit-button {
  align-self: flex-start;
  padding: 0.9rem 2.4rem;
  border: none;
  border-radius: 999px;
  background: var(--horizon);
  color: #fff;
  font: inherit;
  cursor: pointer;
}

.submit-button:disabled {
  opacity: 0.6;
  cursor: progress;
}

/* === Footer === */
.footer {
  padding: 2.5rem 0;
  border-top: 1px solid var(--night-border);
  color: var(--text-muted);
  text-align: center;
  font-size: 0.9rem;
}
"#;
