//! Embedded single-page UI

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dataset Voyage</title>
    <style>
        body { margin: 0; font-family: system-ui, sans-serif; color: #1f2328; display: flex; min-height: 100vh; }
        aside { width: 260px; padding: 24px; background: #f3f4f6; border-right: 1px solid #d0d7de; }
        main { flex: 1; padding: 24px 40px; max-width: 900px; }
        label { display: block; margin: 16px 0 6px; font-weight: 600; font-size: 14px; }
        select, input[type=range] { width: 100%; }
        .value { float: right; font-weight: 400; color: #57606a; }
        .stats p { margin: 6px 0; }
        .error { color: #cf222e; background: #ffebe9; padding: 12px; border-radius: 6px; }
        .muted { color: #57606a; }
        #plot svg { max-width: 100%; height: auto; }
    </style>
</head>
<body>
    <aside>
        <label for="dataset">Select Dataset</label>
        <select id="dataset"></select>
        <label for="classifier">Select Classifier</label>
        <select id="classifier"></select>
        <div id="sliders"></div>
    </aside>
    <main>
        <h1>Dataset Voyage</h1>
        <h3><em>~Embark on an Interactive Journey to Uncover Toy Datasets and Empower Your Classifier Analysis~</em></h3>
        <p>Discover classic toy datasets. Choose the dataset you want to explore from the panel on the left,
        select the algorithm, adjust the parameters and observe the change in accuracy.</p>
        <div id="output">
            <p class="muted">Loading&hellip;</p>
        </div>
    </main>
<script>
const state = { datasets: [], classifiers: [], params: {}, pending: 0 };

const $ = (id) => document.getElementById(id);

async function getJson(url, options) {
    const res = await fetch(url, options);
    const body = await res.json();
    if (!res.ok) throw new Error(body.message || res.statusText);
    return body;
}

function currentClassifier() {
    return state.classifiers.find((c) => c.name === $('classifier').value);
}

function renderSliders() {
    const clf = currentClassifier();
    const container = $('sliders');
    container.innerHTML = '';
    state.params = {};
    for (const s of clf.sliders) {
        state.params[s.name] = s.default;
        const label = document.createElement('label');
        const value = document.createElement('span');
        value.className = 'value';
        value.textContent = s.default;
        label.textContent = s.label;
        label.appendChild(value);
        const input = document.createElement('input');
        input.type = 'range';
        input.min = s.min;
        input.max = s.max;
        input.step = s.step;
        input.value = s.default;
        input.addEventListener('input', () => {
            const v = s.integer ? parseInt(input.value, 10) : parseFloat(input.value);
            state.params[s.name] = v;
            value.textContent = v;
        });
        input.addEventListener('change', evaluate);
        container.appendChild(label);
        container.appendChild(input);
    }
}

function renderResult(r) {
    const d = r.dataset;
    $('output').innerHTML = `
        <div class="stats">
            <p>Shape of dataset: (${d.n_samples}, ${d.n_features})</p>
            <p>Number of classes: ${d.n_classes}</p>
            <p>Classifier = ${r.classifier}</p>
            <p>Accuracy = ${r.accuracy}</p>
        </div>
        <div id="plot">${r.plot_svg}</div>`;
}

function renderError(message) {
    const div = document.createElement('div');
    div.className = 'error';
    div.textContent = message;
    $('output').replaceChildren(div);
}

async function evaluate() {
    const ticket = ++state.pending;
    try {
        const result = await getJson('/api/evaluate', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({
                dataset: $('dataset').value,
                classifier: $('classifier').value,
                params: state.params,
            }),
        });
        if (ticket === state.pending) renderResult(result);
    } catch (err) {
        if (ticket === state.pending) renderError(err.message);
    }
}

async function init() {
    try {
        const [ds, cl] = await Promise.all([getJson('/api/datasets'), getJson('/api/classifiers')]);
        state.datasets = ds.datasets;
        state.classifiers = cl.classifiers;
    } catch (err) {
        renderError(err.message);
        return;
    }
    for (const d of state.datasets) $('dataset').add(new Option(d.name, d.name));
    for (const c of state.classifiers) $('classifier').add(new Option(c.name, c.name));
    $('dataset').addEventListener('change', evaluate);
    $('classifier').addEventListener('change', () => { renderSliders(); evaluate(); });
    renderSliders();
    evaluate();
}

init();
</script>
</body>
</html>
"##;
