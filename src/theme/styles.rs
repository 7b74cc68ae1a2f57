//! Global CSS styles for Folio.
//!
//! One stylesheet injected at the app root. The light/dark palettes live
//! in CSS custom properties switched by the theme class on `.page`;
//! animation timings that components own are inlined from the motion
//! table, everything purely decorative stays here.

pub const GLOBAL_STYLES: &str = r#"
/* === Palette === */
.page.theme-light {
  --bg: #ffffff;
  --bg-alt: #f9fafb;
  --card: #ffffff;
  --card-border: #e5e7eb;
  --text: #111827;
  --text-soft: #4b5563;
  --text-muted: #6b7280;
  --accent: #4f46e5;
  --accent-soft: #6366f1;
  --accent-contrast: #ffffff;
  --accent-wash: rgba(79, 70, 229, 0.1);
  --navbar-bg: rgba(255, 255, 255, 0.8);
  --shadow: 0 10px 30px rgba(17, 24, 39, 0.08);
}

.page.theme-dark {
  --bg: #111827;
  --bg-alt: #1f2937;
  --card: #1f2937;
  --card-border: #374151;
  --text: #f3f4f6;
  --text-soft: #d1d5db;
  --text-muted: #9ca3af;
  --accent: #818cf8;
  --accent-soft: #6366f1;
  --accent-contrast: #ffffff;
  --accent-wash: rgba(129, 140, 248, 0.12);
  --navbar-bg: rgba(17, 24, 39, 0.8);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  -webkit-font-smoothing: antialiased;
}

img {
  max-width: 100%;
  display: block;
}

button {
  font: inherit;
  background: none;
  border: none;
  cursor: pointer;
  color: inherit;
}

a {
  text-decoration: none;
  color: inherit;
}

/* === Page Shell === */
.page {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background 300ms ease, color 300ms ease;
}

.scroll-sentinel {
  position: absolute;
  top: 0;
  left: 0;
  width: 1px;
  height: 50px;
  pointer-events: none;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 40;
  transition: background 300ms ease, box-shadow 300ms ease;
  background: transparent;
}

.navbar-scrolled {
  background: var(--navbar-bg);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow);
}

.navbar-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.logo-badge {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  background: linear-gradient(90deg, var(--accent), #9333ea);
  color: #ffffff;
  font-weight: 700;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.logo-name {
  font-weight: 700;
  font-size: 1.25rem;
  background: linear-gradient(90deg, var(--accent), #9333ea);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  position: relative;
  font-weight: 500;
  color: var(--text-soft);
  padding: 0.25rem 0;
  transition: color 200ms ease;
}

.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: 0;
  width: 100%;
  height: 2px;
  background: var(--accent);
  transform: scaleX(0);
  transform-origin: left;
  transition: transform 300ms ease;
}

.nav-link:hover {
  color: var(--accent);
}

.nav-link:hover::after {
  transform: scaleX(1);
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.icon-button {
  padding: 0.5rem;
  border-radius: 9999px;
  color: var(--text-soft);
  display: inline-flex;
  transition: background 200ms ease, color 200ms ease;
}

.icon-button:hover {
  background: var(--accent-wash);
  color: var(--accent);
}

.menu-button {
  display: none;
}

.mobile-menu {
  position: fixed;
  top: 4.5rem;
  left: 0;
  right: 0;
  z-index: 39;
  background: var(--navbar-bg);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow);
  animation: fade-in 300ms ease both;
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1rem 1.5rem;
}

.mobile-menu-link {
  font-weight: 500;
  padding: 0.5rem 0;
  color: var(--text);
}

.mobile-menu-link:hover {
  color: var(--accent);
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  padding: 0 1rem;
}

.hero-content {
  max-width: 56rem;
  text-align: center;
  animation: fade-in 500ms ease both;
}

.hero-name {
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: 1rem;
}

.hero-role-line {
  height: 3.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.hero-role {
  font-size: clamp(1.25rem, 3vw, 1.875rem);
  font-weight: 500;
}

.hero-role-prefix {
  margin-right: 0.5rem;
}

.gradient-text {
  background: linear-gradient(90deg, var(--accent), #9333ea);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.caret {
  color: var(--accent);
  animation: blink 1000ms step-end infinite;
}

@keyframes blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

.hero-pitch {
  font-size: 1.125rem;
  color: var(--text-soft);
  max-width: 44rem;
  margin: 2rem auto 2.5rem;
}

.accent-term {
  font-weight: 600;
  color: var(--accent);
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 3.5rem;
  flex-wrap: wrap;
}

.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.75rem;
  border-radius: 9999px;
  font-weight: 600;
  transition: transform 200ms ease, background 200ms ease, color 200ms ease;
}

.btn:hover {
  transform: scale(1.05);
}

.btn:active {
  transform: scale(0.95);
}

.btn-primary {
  background: var(--accent);
  color: var(--accent-contrast);
}

.btn-primary:hover {
  background: var(--accent-soft);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: wait;
  transform: none;
}

.btn-secondary {
  border: 1px solid var(--accent);
  color: var(--accent);
}

.btn-secondary:hover {
  background: var(--accent-wash);
}

.hero-socials {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
}

.social-button {
  color: var(--text-soft);
  transition: color 200ms ease, transform 200ms ease;
  display: inline-flex;
}

.social-button:hover {
  color: var(--accent);
  transform: translateY(-3px);
}

.scroll-indicator {
  position: absolute;
  bottom: 2.5rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--text-muted);
  animation: bob 1500ms ease-in-out infinite;
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-8px); }
}

/* === Sections === */
.section {
  padding: 6rem 1.5rem;
  max-width: 72rem;
  margin: 0 auto;
}

.section-alt {
  background: var(--bg-alt);
  max-width: none;
}

.section-alt > * {
  max-width: 72rem;
  margin-left: auto;
  margin-right: auto;
}

.section-heading {
  text-align: center;
  margin-bottom: 4rem;
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  display: inline-block;
  border-bottom: 3px solid var(--accent);
  padding-bottom: 0.5rem;
}

.section-lead {
  font-size: 1.125rem;
  color: var(--text-soft);
  max-width: 44rem;
  margin: 1rem auto 0;
}

.section-footer {
  text-align: center;
  margin-top: 3rem;
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(20px);
}

.reveal-in {
  opacity: 1;
  transform: none;
}

/* === Cards === */
.card {
  background: var(--card);
  border: 1px solid var(--card-border);
  border-radius: 1rem;
  box-shadow: var(--shadow);
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.about-illustration {
  aspect-ratio: 1;
  border-radius: 1rem;
  overflow: hidden;
  padding: 1.5rem;
}

.about-headline {
  font-size: 1.75rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.about-paragraph {
  color: var(--text-soft);
  margin-bottom: 1.5rem;
}

.achievement-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
  margin-top: 2rem;
}

.achievement-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  padding: 1rem;
  border-radius: 0.75rem;
  background: var(--bg-alt);
}

.achievement-icon {
  color: var(--accent);
  margin-bottom: 0.5rem;
}

.achievement-title {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-muted);
}

.achievement-detail {
  font-weight: 700;
}

/* === Skills === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 2rem;
}

.skill-card {
  padding: 1.5rem;
}

.skill-group-name {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
  display: flex;
  align-items: center;
}

.skill-group-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--accent);
  margin-right: 0.5rem;
}

.skill-bar {
  margin-bottom: 1rem;
}

.skill-bar-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.25rem;
}

.skill-bar-name {
  font-size: 0.875rem;
  font-weight: 500;
}

.skill-bar-level {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.skill-bar-track {
  width: 100%;
  height: 0.625rem;
  border-radius: 9999px;
  background: var(--accent-wash);
  overflow: hidden;
}

.skill-bar-fill {
  height: 100%;
  border-radius: 9999px;
  background: linear-gradient(90deg, var(--accent), #9333ea);
}

.tech-cloud-card {
  margin-top: 4rem;
  padding: 2rem;
}

.tech-cloud-title {
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1.5rem;
}

.tech-cloud {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.tech-chip {
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  background: var(--accent-wash);
  font-size: 0.875rem;
  font-weight: 500;
  opacity: 0;
  transform: scale(0.8);
}

.tech-chip-in {
  opacity: 1;
  transform: scale(1);
}

/* === Projects === */
.category-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 3rem;
}

.category-pill {
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  font-size: 0.875rem;
  font-weight: 500;
  background: var(--bg-alt);
  color: var(--text-soft);
  transition: background 200ms ease, color 200ms ease;
}

.category-pill:hover {
  background: var(--accent-wash);
}

.category-pill-active {
  background: var(--accent);
  color: var(--accent-contrast);
}

.category-pill-active:hover {
  background: var(--accent);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 2rem;
}

.project-card {
  height: 100%;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  transition: transform 300ms ease;
}

.project-card:hover {
  transform: translateY(-10px);
}

.project-media {
  position: relative;
  height: 12rem;
  overflow: hidden;
}

.project-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 500ms ease;
}

.project-card:hover .project-image {
  transform: scale(1.1);
}

.project-media-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
  opacity: 0;
  transition: opacity 300ms ease;
  display: flex;
  align-items: flex-end;
  padding: 1rem;
}

.project-card:hover .project-media-overlay {
  opacity: 1;
}

.project-tags {
  display: flex;
  gap: 0.5rem;
}

.project-tag {
  font-size: 0.75rem;
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(4px);
  color: #ffffff;
}

.project-body {
  padding: 1.5rem;
  flex: 1;
  display: flex;
  flex-direction: column;
}

.project-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.project-description {
  color: var(--text-soft);
  flex: 1;
  margin-bottom: 1rem;
}

.project-links {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding-top: 1rem;
  border-top: 1px solid var(--card-border);
}

.project-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--accent);
  font-weight: 500;
}

.project-link:hover {
  text-decoration: underline;
}

.project-link-muted {
  color: var(--text-soft);
}

.project-link-muted:hover {
  color: var(--accent);
  text-decoration: none;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 2fr 3fr;
  gap: 2rem;
  align-items: stretch;
}

.contact-card {
  padding: 2rem;
  height: 100%;
}

.contact-card-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.contact-channels {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  margin-bottom: 1.5rem;
}

.contact-channel {
  display: flex;
  align-items: flex-start;
}

.contact-channel-icon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  background: var(--accent-wash);
  color: var(--accent);
  display: flex;
  align-items: center;
  justify-content: center;
  margin-right: 1rem;
  flex-shrink: 0;
}

.contact-channel-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-muted);
}

.contact-channel-value {
  font-weight: 500;
  text-align: left;
  padding: 0;
}

.contact-channel-link:hover {
  color: var(--accent);
}

.copy-button {
  font-size: 0.875rem;
  font-weight: 500;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--card-border);
  color: var(--text-soft);
  margin-bottom: 2rem;
  transition: border-color 200ms ease, color 200ms ease;
}

.copy-button:hover {
  border-color: var(--accent);
  color: var(--accent);
}

.copy-button.copied {
  border-color: var(--accent);
  color: var(--accent);
}

.contact-socials-title {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-muted);
  margin-bottom: 0.75rem;
}

.contact-social-row {
  display: flex;
  gap: 1rem;
}

/* === Form === */
.form-banner {
  padding: 1rem;
  border-radius: 0.5rem;
  margin-bottom: 1.5rem;
  animation: fade-in 300ms ease both;
}

.form-banner-success {
  background: rgba(34, 197, 94, 0.15);
  color: #15803d;
}

.page.theme-dark .form-banner-success {
  color: #86efac;
}

.form-banner-error {
  background: rgba(239, 68, 68, 0.15);
  color: #b91c1c;
}

.page.theme-dark .form-banner-error {
  color: #fca5a5;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.form-field label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-soft);
  margin-bottom: 0.25rem;
}

.form-field input,
.form-field textarea {
  font: inherit;
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--card-border);
  background: var(--bg);
  color: var(--text);
  resize: vertical;
}

.form-field input:focus,
.form-field textarea:focus {
  outline: 2px solid var(--accent);
  outline-offset: 0;
  border-color: transparent;
}

.contact-form .btn {
  align-self: flex-start;
}

/* === Footer === */
.footer {
  background: #111827;
  color: #f3f4f6;
  padding: 4rem 1.5rem 2rem;
}

.footer-inner {
  max-width: 72rem;
  margin: 0 auto;
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 2rem;
  margin-bottom: 3rem;
}

.footer-brand-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.footer-brand-name {
  font-weight: 700;
  font-size: 1.25rem;
}

.footer-blurb {
  color: #9ca3af;
  max-width: 28rem;
  margin-bottom: 1.5rem;
}

.footer-socials {
  display: flex;
  gap: 1rem;
}

.footer-social-link {
  color: #9ca3af;
  transition: color 200ms ease;
}

.footer-social-link:hover {
  color: #ffffff;
}

.footer-column-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 1rem;
}

.footer-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.footer-link {
  color: #9ca3af;
  transition: color 200ms ease;
  text-align: left;
  padding: 0;
}

.footer-link:hover {
  color: #ffffff;
}

.footer-email {
  color: #818cf8;
  display: block;
}

.footer-email:hover {
  color: #a5b4fc;
}

.footer-muted {
  color: #9ca3af;
  display: block;
}

.footer-bottom {
  border-top: 1px solid #1f2937;
  padding-top: 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.footer-copyright {
  color: #9ca3af;
  font-size: 0.875rem;
}

.back-to-top {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  background: #1f2937;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background 200ms ease, transform 200ms ease;
}

.back-to-top:hover {
  background: #4f46e5;
  transform: translateY(-3px);
}

/* === Loader === */
.loader {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--bg), var(--bg-alt));
}

.loader-stack {
  display: flex;
  flex-direction: column;
  align-items: center;
  animation: fade-in 600ms ease both;
}

.loader-badge {
  width: 6rem;
  height: 6rem;
  border-radius: 9999px;
  background: linear-gradient(90deg, #4f46e5, #9333ea);
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 2rem;
}

.loader-monogram {
  color: #ffffff;
  font-size: 1.875rem;
  font-weight: 700;
}

.loader-heading {
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1rem;
}

.loader-icons {
  display: flex;
  gap: 0.5rem;
}

.loader-icon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  background: var(--card);
  box-shadow: var(--shadow);
  color: var(--accent);
  display: flex;
  align-items: center;
  justify-content: center;
}

.loader-caption {
  margin-top: 2rem;
  color: var(--text-muted);
}

/* === Cursor Overlay === */
.cursor-overlay {
  position: fixed;
  top: 0;
  left: 0;
  z-index: 60;
  border-radius: 9999px;
  pointer-events: none;
  mix-blend-mode: difference;
  background: rgba(97, 114, 249, 0.4);
  border: 1px solid rgba(97, 114, 249, 0.8);
}

.cursor-hovering {
  background: rgba(97, 114, 249, 0.6);
  border-color: #6172f9;
}

.cursor-pressed {
  background: rgba(97, 114, 249, 0.8);
}

.cursor-dots {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
}

.cursor-dot {
  width: 0.25rem;
  height: 0.25rem;
  border-radius: 9999px;
  background: #ffffff;
  animation: dot-pulse 1000ms ease-in-out infinite;
}

@keyframes dot-pulse {
  0%, 100% { transform: scale(1); opacity: 0.3; }
  50% { transform: scale(1.5); opacity: 1; }
}

/* === Mobile === */
@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-button {
    display: inline-flex;
  }

  .logo-name {
    display: none;
  }

  .about-grid,
  .skill-grid,
  .form-row,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .project-grid {
    grid-template-columns: 1fr;
  }

  .footer-grid {
    grid-template-columns: 1fr;
  }

  .section {
    padding: 4rem 1rem;
  }
}

@media (min-width: 769px) and (max-width: 1024px) {
  .project-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}
"#;
