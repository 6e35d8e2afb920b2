pub const PAGE_STYLES: &str = r#"
:root {
    --pink: #ff6fa5;
    --sky: #9be7f5;
    --ink: #2b2230;
    --muted: #7a6c80;
    --card-bg: #ffffff;
    --page-bg: #fff7fb;
    --radius-lg: 18px;
    --shadow-lg: 0 20px 60px rgba(43, 34, 48, 0.25);
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    color: var(--ink);
    background: var(--page-bg);
}

/* Nav */
.nav {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: space-between;
    flex-wrap: wrap;
    padding: 0.75rem 1.5rem;
    background: rgba(255, 247, 251, 0.9);
    backdrop-filter: blur(8px);
}

.brand {
    font-weight: 700;
    color: var(--pink);
    text-decoration: none;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.nav-links a {
    color: var(--ink);
    text-decoration: none;
}

.nav-cta,
.cta {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 999px;
    background: var(--pink);
    color: white;
    font-weight: 600;
    cursor: pointer;
}

.mobile-toggle {
    border: none;
    background: transparent;
    font-size: 1.5rem;
    cursor: pointer;
}

/* Hero */
.hero {
    padding: 4rem 1.5rem;
}

.hero-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    max-width: 960px;
    margin: 0 auto;
}

.hero-title {
    min-height: 1.2em;
    font-size: clamp(2rem, 6vw, 3.5rem);
    margin: 0 0 0.5rem;
}

.hero-sub {
    color: var(--muted);
}

.profile {
    width: 220px;
    height: 220px;
    border-radius: 50%;
    object-fit: cover;
    box-shadow: var(--shadow-lg);
}

/* Sections */
.section {
    max-width: 960px;
    margin: 0 auto;
    padding: 3rem 1.5rem;
}

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 1rem;
}

.moment {
    margin: 0;
}

.moment img {
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
    border-radius: 12px;
}

.section,
.grid,
.hero-inner {
    opacity: 0;
    transform: translateY(16px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.section.reveal,
.grid.reveal,
.hero-inner.reveal {
    opacity: 1;
    transform: none;
}

.footer {
    padding: 2rem;
    text-align: center;
    color: var(--muted);
}

/* Lover popup */
.lover-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    background: rgba(43, 34, 48, 0.45);
    opacity: 0;
    visibility: hidden;
    transition: opacity 0.25s ease, visibility 0.25s ease;
}

.lover-overlay.show {
    opacity: 1;
    visibility: visible;
}

.lover {
    position: fixed;
    left: 50%;
    top: 50%;
    transform: translate(-50%, -50%);
    width: min(560px, 92vw);
    max-height: 86vh;
    display: flex;
    flex-direction: column;
    background: var(--card-bg);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
    overflow: hidden;
    transition: left 0.2s ease, top 0.2s ease, transform 0.25s ease;
}

.lover-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.6rem 0.9rem;
    background: linear-gradient(90deg, var(--pink), var(--sky));
    color: white;
    cursor: grab;
    user-select: none;
    touch-action: none;
}

.lover-controls {
    display: flex;
    gap: 0.35rem;
}

.lover-control {
    width: 28px;
    height: 28px;
    border: none;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.25);
    color: white;
    font-size: 1.1rem;
    cursor: pointer;
}

.lover-body {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 0.9rem;
    min-height: 0;
}

.lover-main {
    width: 100%;
    height: 320px;
    border-radius: 12px;
    transition: opacity 0.18s ease;
}

.lover-thumbs {
    display: flex;
    gap: 0.5rem;
    overflow-x: auto;
}

.thumb {
    flex: 0 0 auto;
    width: 64px;
    height: 64px;
    padding: 0;
    border: 2px solid transparent;
    border-radius: 10px;
    overflow: hidden;
    background: none;
    cursor: pointer;
}

.thumb img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.thumb.active {
    border-color: var(--pink);
}

.lover-mini {
    position: fixed;
    right: 1rem;
    bottom: 1rem;
    z-index: 90;
    padding: 0.4rem;
    border-radius: 14px;
    background: var(--card-bg);
    box-shadow: var(--shadow-lg);
    cursor: pointer;
}

.lover-mini img {
    display: block;
    width: 72px;
    height: 72px;
    object-fit: cover;
    border-radius: 10px;
}

.lover-mini span {
    display: block;
    margin-top: 0.25rem;
    font-size: 0.75rem;
    text-align: center;
}

@media (max-width: 720px) {
    .hero-inner {
        flex-direction: column-reverse;
        text-align: center;
    }

    .nav-links {
        flex-basis: 100%;
        flex-direction: column;
        align-items: flex-start;
        padding-top: 0.75rem;
    }
}
"#;
