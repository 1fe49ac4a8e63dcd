//! Site-wide stylesheet. Section-specific rules live next to their
//! components in inline `<style>` blocks.

use stylist::yew::Global;
use stylist::css;
use yew::prelude::*;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --neptech-blue: #0ea5e9;
                --neptech-purple: #8b5cf6;
                --neptech-green: #10b981;
                --neptech-dark: #0f172a;
                --neptech-gray: #f8fafc;
                --ease-elastic: cubic-bezier(0.34, 1.56, 0.64, 1);
            }

            *, *::before, *::after { box-sizing: border-box; }

            html { scroll-behavior: smooth; }

            body {
                margin: 0;
                font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                color: var(--neptech-dark);
                background: #fff;
                -webkit-font-smoothing: antialiased;
            }

            body.scroll-locked { overflow: hidden; }

            h1, h2, h3, h4, p { margin: 0; }

            a { color: inherit; text-decoration: none; }

            img { max-width: 100%; }

            .container { width: 100%; max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }

            .section-padding { padding: 6rem 0; }

            .section-gray { background: var(--neptech-gray); }

            .section-title { max-width: 48rem; margin: 0 auto 4rem; text-align: center; }

            .section-title h2 {
                font-size: clamp(1.875rem, 3vw, 2.25rem);
                font-weight: 700;
                margin: 1rem 0 1.5rem;
            }

            .muted { color: rgba(15, 23, 42, 0.7); }

            .badge {
                display: inline-block;
                padding: 0.25rem 1rem;
                border-radius: 9999px;
                font-size: 0.875rem;
                font-weight: 500;
                letter-spacing: 0.05em;
                color: var(--neptech-blue);
                background: rgba(14, 165, 233, 0.1);
            }

            .button-primary, .button-secondary {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 2rem;
                border-radius: 9999px;
                font: inherit;
                font-weight: 500;
                cursor: pointer;
                transition: all 0.3s var(--ease-elastic);
            }

            .button-primary {
                color: #fff;
                border: none;
                background: linear-gradient(90deg, var(--neptech-blue), var(--neptech-purple));
                box-shadow: 0 10px 15px rgba(14, 165, 233, 0.25);
            }

            .button-primary:hover { transform: translateY(-2px); box-shadow: 0 20px 25px rgba(14, 165, 233, 0.3); }

            .button-secondary {
                color: var(--neptech-dark);
                background: #fff;
                border: 1px solid rgba(15, 23, 42, 0.1);
            }

            .button-secondary:hover { border-color: var(--neptech-blue); color: var(--neptech-blue); }

            .button-arrow { transition: transform 0.3s; }

            .button-primary:hover .button-arrow { transform: translateX(0.25rem); }

            .nav-link { position: relative; font-weight: 500; color: rgba(15, 23, 42, 0.8); transition: color 0.3s; }

            .nav-link:hover { color: var(--neptech-blue); }

            .gradient-text {
                background-image: linear-gradient(90deg, var(--neptech-blue), var(--neptech-purple));
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .gradient-red { background-image: linear-gradient(135deg, #f87171, #dc2626); }
            .gradient-indigo { background-image: linear-gradient(135deg, #818cf8, #4f46e5); }
            .gradient-teal { background-image: linear-gradient(135deg, #2dd4bf, #0d9488); }
            .gradient-amber { background-image: linear-gradient(135deg, #fbbf24, #d97706); }
            .gradient-rose { background-image: linear-gradient(135deg, #fb7185, #e11d48); }
            .gradient-blue { background-image: linear-gradient(90deg, var(--neptech-blue), #2563eb); }
            .gradient-purple { background-image: linear-gradient(90deg, #9333ea, var(--neptech-purple)); }
            .gradient-green { background-image: linear-gradient(90deg, #22c55e, var(--neptech-green)); }

            .section-blobs { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }

            .blob { position: absolute; border-radius: 9999px; filter: blur(60px); }
            .blob-tl { top: -8rem; left: -8rem; width: 24rem; height: 24rem; background: rgba(14, 165, 233, 0.05); }
            .blob-tr { top: -16rem; right: -16rem; width: 500px; height: 500px; background: rgba(139, 92, 246, 0.05); }
            .blob-bl { bottom: 5rem; left: -5rem; width: 300px; height: 300px; background: rgba(16, 185, 129, 0.05); }
            .blob-br { bottom: -8rem; right: -8rem; width: 24rem; height: 24rem; background: rgba(139, 92, 246, 0.05); }
            .blob-mr { top: 10rem; left: 60%; width: 400px; height: 400px; background: rgba(250, 204, 21, 0.05); }

            .card-3d { position: relative; transform-style: preserve-3d; transition: transform 0.2s ease-out; }

            .card-3d-content { position: relative; transform-style: preserve-3d; transition: transform 0.2s ease-out; }

            .card-shine {
                position: absolute;
                inset: 0;
                border-radius: inherit;
                pointer-events: none;
                opacity: 0;
                background: radial-gradient(circle at var(--mouse-x, 50%) var(--mouse-y, 50%), rgba(255, 255, 255, 0.25), transparent 60%);
                transition: opacity 0.3s;
            }

            .card-3d:hover .card-shine { opacity: 1; }

            .reveal-target { opacity: 0; }

            .animate-fade-in { animation: fade-in 0.7s ease-out both; }
            .animate-scale-in { animation: scale-in 0.5s var(--ease-elastic) both; }
            .animate-fade-in-left { animation: fade-in-left 0.7s ease-out both; }
            .animate-fade-in-right { animation: fade-in-right 0.7s ease-out both; }
            .animate-blur-in { animation: blur-in 0.8s ease-out both; }

            @keyframes float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-10px); }
            }

            @keyframes fade-in {
                from { opacity: 0; translate: 0 10px; }
                to { opacity: 1; translate: 0 0; }
            }

            @keyframes scale-in {
                from { opacity: 0; scale: 0.95; }
                to { opacity: 1; scale: 1; }
            }

            @keyframes fade-in-left {
                from { opacity: 0; translate: -20px 0; }
                to { opacity: 1; translate: 0 0; }
            }

            @keyframes fade-in-right {
                from { opacity: 0; translate: 20px 0; }
                to { opacity: 1; translate: 0 0; }
            }

            @keyframes blur-in {
                from { opacity: 0; filter: blur(8px); }
                to { opacity: 1; filter: blur(0); }
            }

            @keyframes pulse-subtle {
                0%, 100% { opacity: 1; }
                50% { opacity: 0.8; }
            }

            @keyframes pulse {
                0%, 100% { opacity: 0.15; }
                50% { opacity: 0.08; }
            }

            @keyframes spin {
                to { transform: rotate(360deg); }
            }
        "#)} />
    }
}
