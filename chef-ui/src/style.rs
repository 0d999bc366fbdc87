pub const STYLE: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 2.5rem 0 1.5rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 560px; margin: 0 auto; }
.chef-form { display: flex; flex-direction: column; gap: 0.75rem; margin: 1.5rem 0; }
.chef-form__label, .reply__label { font-weight: 600; color: var(--subtle); }
.chef-form__input, .reply__output {
    width: 100%; padding: 1rem 1.25rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--surface); color: var(--text);
    font-size: 1rem; font-family: inherit; resize: vertical;
}
.chef-form__input:focus { outline: none; border-color: var(--pine); }
.chef-form__input::placeholder { color: var(--muted); }
.chef-form__slider { width: 100%; accent-color: var(--gold); }
.chef-form__value { color: var(--gold); font-weight: 700; margin-left: 0.5rem; }
.chef-form__button {
    padding: 1rem 2rem; background: var(--pine); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.chef-form__button:hover { opacity: 0.9; }
.chef-form__button:disabled { background: var(--muted); cursor: not-allowed; }
.reply { display: flex; flex-direction: column; gap: 0.75rem; margin: 1.5rem 0; }
.reply__output { line-height: 1.6; white-space: pre-wrap; }
.reply__output--error { border-color: var(--love); color: #8b3d4d; }
.examples { margin: 2rem 0; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.examples__title { font-weight: 700; color: var(--subtle); margin-bottom: 0.75rem; }
.examples__list { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
.examples__item {
    width: 100%; text-align: left; padding: 0.75rem 1rem; background: var(--surface);
    border: 1px solid var(--overlay); border-radius: 6px; color: var(--text);
    font-size: 0.95rem; cursor: pointer;
}
.examples__item:hover { border-color: var(--foam); }
"#;

pub const FORM_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    const form = document.querySelector('.chef-form');
    const input = document.querySelector('.chef-form__input');
    const button = document.querySelector('.chef-form__button');
    const slider = document.querySelector('.chef-form__slider');
    const sliderValue = document.querySelector('.chef-form__value');

    document.querySelectorAll('.examples__item').forEach(function(item) {
        item.addEventListener('click', function() {
            input.value = item.dataset.prompt;
            input.focus();
        });
    });

    if (slider) {
        slider.addEventListener('input', function() {
            sliderValue.textContent = Number(slider.value).toFixed(2);
        });
    }

    form.addEventListener('submit', function() {
        button.disabled = true;
        button.textContent = 'Cooking...';
        button.style.cursor = 'wait';
    });
});
"#;
